pub mod antibot;
pub mod share;
pub mod waitlist;
