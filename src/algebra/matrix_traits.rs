/// Shape queries common to all matrix types.
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
    /// true for a matrix with no storage, i.e. `0 × 0`
    fn is_empty(&self) -> bool {
        self.nrows() == 0 || self.ncols() == 0
    }
}
