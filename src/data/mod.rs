pub mod breeds;
pub mod ownership;
pub mod parse;
pub mod regions;
pub mod table;
pub mod validate;

pub use breeds::{load_breed_rankings, normalize_breed, retain_established_breeds, BreedRank};
pub use ownership::{load_pet_ownership, SpeciesRecord};
pub use regions::{load_regions, RegionRecord, RegionTable};
pub use table::{read_table, RawTable};
