pub(crate) mod walker;
