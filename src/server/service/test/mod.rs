mod file;
mod member;
mod study;
mod vote;
