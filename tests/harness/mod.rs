#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use services::MockServices;
pub(crate) use test_context::TestContext;
