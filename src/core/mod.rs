/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod client;
pub mod datetime;
pub mod errors;
pub mod index;
pub mod json;
