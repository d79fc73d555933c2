pub trait SimdVec<T> {
    fn new(slice: &[T]) -> Self;

    /// Broadcasts one value to every lane.
    ///
    /// # Safety
    ///
    /// Requires the backend's target feature to be enabled.
    unsafe fn splat(value: T) -> Self;

    /// Loads a full vector of `size` lanes from `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `size` elements.
    unsafe fn load(ptr: *const T, size: usize) -> Self;

    /// Loads fewer than a full vector of lanes, zero-filling the rest.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `size` elements.
    unsafe fn load_partial(ptr: *const T, size: usize) -> Self;

    /// # Safety
    ///
    /// Requires the backend's target feature to be enabled.
    unsafe fn store_in_vec(&self) -> Vec<T>;

    /// # Safety
    ///
    /// Requires the backend's target feature to be enabled.
    unsafe fn store_in_vec_partial(&self) -> Vec<T>;

    /// Stores all lanes at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of a full vector of elements.
    unsafe fn store_at(&self, ptr: *mut T);

    /// Stores only the active lanes at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `self.size` elements.
    unsafe fn store_at_partial(&self, ptr: *mut T);

    fn to_vec(self) -> Vec<T>;
}

/// Lane-wise saturating addition over byte slices.
///
/// All three methods compute the same contract, `min(a[i] + b[i], 255)` per
/// lane; they differ only in execution strategy. `simd_qadd` uses the backend
/// selected at build time, `par_simd_qadd` additionally splits the work across
/// the rayon thread pool, and `scalar_qadd` is the plain clamping loop the
/// other two are checked against.
pub trait SimdQadd<Rhs = Self> {
    type Output;

    fn simd_qadd(self, rhs: Rhs) -> Self::Output;
    fn par_simd_qadd(self, rhs: Rhs) -> Self::Output;
    fn scalar_qadd(self, rhs: Rhs) -> Self::Output;
}
