pub mod assets;
pub mod stats;
pub mod status;
pub mod vulnerabilities;
