use drive_sheet_file_processor::strategy_factory::StrategyFactory;
use reqwest::Client;

/// Everything a batch run shares: one HTTP session, the strategy lookup, and the drive credentials.
pub struct ExportContext {
    pub session: Client,
    pub factory: StrategyFactory,
    pub access_token: String,
    pub drive_id: String,
}
