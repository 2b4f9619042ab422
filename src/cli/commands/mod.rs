pub mod migrate;
pub mod remote;
pub mod serve;
pub mod token;
