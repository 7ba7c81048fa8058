// Multi-message pipelines built on top of the relay.

pub mod batch;
