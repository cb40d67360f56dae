/// Get the position of (`row`, `col`) in the column-major data of an operator over `nindices`
/// qubits.
///
/// # Example
/// ```
/// use qsim_iterators::utils::get_flat_index;
///
/// // 2x2 operator: columns are stored one after the other.
/// assert_eq!(get_flat_index(1, 1, 0), 1);
/// assert_eq!(get_flat_index(1, 0, 1), 2);
/// ```
#[inline]
pub fn get_flat_index(nindices: usize, row: usize, col: usize) -> usize {
    let mat_side = 1 << nindices;
    (col * mat_side) + row
}

/// Set the `bit_index` bit in `num` to `value`.
///
/// # Example
/// ```
/// use qsim_iterators::utils::set_bit;
/// assert_eq!(set_bit(0, 1, true), 2);
/// assert_eq!(set_bit(1, 1, true), 3);
/// assert_eq!(set_bit(1, 0, false), 0);
/// ```
#[inline]
pub fn set_bit(num: usize, bit_index: usize, value: bool) -> usize {
    let v = 1 << bit_index;
    if value {
        num | v
    } else {
        num & !v
    }
}

/// Get the `bit_index` bit value from `num`.
///
/// # Example
/// ```
/// use qsim_iterators::utils::get_bit;
/// assert!(get_bit(2, 1));
/// assert!(!get_bit(2, 0));
/// ```
#[inline]
pub fn get_bit(num: usize, bit_index: usize) -> bool {
    ((num >> bit_index) & 1) != 0
}

/// Returns `Some(log2(count))` if `count` is a nonzero power of two.
///
/// # Example
/// ```
/// use qsim_iterators::utils::exact_log2;
/// assert_eq!(exact_log2(8), Some(3));
/// assert_eq!(exact_log2(1), Some(0));
/// assert_eq!(exact_log2(6), None);
/// assert_eq!(exact_log2(0), None);
/// ```
#[inline]
pub fn exact_log2(count: usize) -> Option<usize> {
    if count.is_power_of_two() {
        Some(count.trailing_zeros() as usize)
    } else {
        None
    }
}

/// Returns `Some(2^n)` if it fits in a `usize`.
///
/// # Example
/// ```
/// use qsim_iterators::utils::checked_pow2;
/// assert_eq!(checked_pow2(3), Some(8));
/// assert_eq!(checked_pow2(0), Some(1));
/// assert_eq!(checked_pow2(usize::BITS as usize), None);
/// ```
#[inline]
pub fn checked_pow2(n: usize) -> Option<usize> {
    u32::try_from(n).ok().and_then(|n| 1usize.checked_shl(n))
}
