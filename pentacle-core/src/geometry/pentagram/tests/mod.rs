mod construction;

use crate::{pentagram::Pentagram, r2::R2, Circle};

/// The pentagram of a 32×32 grid: center (15.5, 15.5), radius 12.5.
fn grid32() -> Pentagram {
    Pentagram::new(Circle::new(R2::new(15.5, 15.5), 12.5).unwrap()).unwrap()
}
