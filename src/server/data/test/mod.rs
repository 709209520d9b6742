mod member;
mod post;
mod reply;
mod report;
