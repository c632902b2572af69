pub trait IsZero {
    fn is_zero(&self) -> bool;
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        let f = *self;
        f == 0. || f == -0.
    }
}
