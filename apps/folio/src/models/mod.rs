pub mod portfolio;
pub mod sections;

pub use portfolio::PortfolioConfig;
