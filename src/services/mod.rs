pub mod distribution;

pub use distribution::{apply_distribution, DistributionFactors};
