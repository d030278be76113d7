mod config;
mod owned;
mod search;
