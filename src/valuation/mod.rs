pub mod industry;
pub mod interpolate;
pub mod resolver;
pub mod tiers;

pub use industry::{load_industries, validate_industries, IndustryTable, Sector, SubSector};
pub use interpolate::{compute_valuation, interpolate_multiple, score_percentage, Valuation};
pub use resolver::{resolve_parameters, ValuationParameters};
pub use tiers::{validate_tiers, EbitdaTier, TierTable, BELOW_MINIMUM_STAGE};
