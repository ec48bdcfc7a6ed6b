pub mod urns;
