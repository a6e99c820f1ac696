mod basic;
mod moraic_n;

use super::*;
