//! Record store services - invariant enforcement on top of the ports.

mod post_service;

pub use post_service::PostService;
