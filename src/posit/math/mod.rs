use super::*;
use crate::underlying::Double;

/// Square root.
mod sqrt;
