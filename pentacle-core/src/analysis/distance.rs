use crate::r2::R2;

pub trait Distance<O> {
    type Output;
    fn distance(&self, o: &O) -> Self::Output;
}

impl Distance<R2<f64>> for R2<f64> {
    type Output = f64;
    fn distance(&self, o: &R2<f64>) -> f64 {
        (*self - *o).norm()
    }
}
