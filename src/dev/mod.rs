/// Development utilities module
///
/// Fixture-backed data provider used by tests and by `--mock` runs.
pub mod mock_client;
