pub(crate) mod acceptable_adj;
pub(crate) mod embed;
pub(crate) mod strongly_planar;
pub(crate) mod structures;

pub mod kuratowski;
