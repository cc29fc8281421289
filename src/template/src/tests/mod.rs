/* src/template/src/tests/mod.rs */

use super::*;
