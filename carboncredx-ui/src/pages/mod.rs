//! Pages
//!
//! One component per section.

pub mod dashboard;
pub mod defi;
pub mod explorer;
pub mod home;
pub mod kyc;
pub mod market;
pub mod rwa;
pub mod upload;
pub mod wallet;

pub use dashboard::Dashboard;
pub use defi::DeFiHub;
pub use explorer::Explorer;
pub use home::Home;
pub use kyc::Kyc;
pub use market::Market;
pub use rwa::Portfolio;
pub use upload::DocumentUpload;
pub use wallet::Wallet;
