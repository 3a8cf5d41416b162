//! Static catalogs. Pages render these; nothing mutates them.

pub mod company;
pub mod faq;
pub mod plans;
pub mod services;
