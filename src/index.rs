//! Helpers for addressing computational basis states.
//!
//! Basis indices are row-major with qubit 0 as the most significant bit:
//! for n qubits, the basis state |b0 b1 ... b(n-1)> has index
//! b0 * 2^(n-1) + b1 * 2^(n-2) + ... + b(n-1).

/// Extracts the bit of `qubit` from a basis index.
///
/// # Examples
/// ```
/// use ccx_tomography::index::bit_at;
///
/// // |110>: qubit 0 and qubit 1 are set, qubit 2 is not
/// assert_eq!(bit_at(6, 0, 3), 1);
/// assert_eq!(bit_at(6, 1, 3), 1);
/// assert_eq!(bit_at(6, 2, 3), 0);
/// ```
pub fn bit_at(index: usize, qubit: usize, num_qubits: usize) -> usize {
    (index >> (num_qubits - 1 - qubit)) & 1
}

/// Flips the bit of `qubit` in a basis index.
///
/// # Examples
/// ```
/// use ccx_tomography::index::flip_bit;
///
/// assert_eq!(flip_bit(6, 2, 3), 7);
/// assert_eq!(flip_bit(7, 0, 3), 3);
/// ```
pub fn flip_bit(index: usize, qubit: usize, num_qubits: usize) -> usize {
    index ^ (1 << (num_qubits - 1 - qubit))
}

/// Whether every listed qubit's bit is set in a basis index.
pub fn all_bits_set(index: usize, qubits: &[usize], num_qubits: usize) -> bool {
    qubits.iter().all(|&q| bit_at(index, q, num_qubits) == 1)
}

/// Packs per-qubit bits (qubit 0 first) into a basis index.
///
/// # Examples
/// ```
/// use ccx_tomography::index::basis_index;
///
/// assert_eq!(basis_index(&[1, 1, 0]), 6);
/// assert_eq!(basis_index(&[0, 0, 1]), 1);
/// ```
pub fn basis_index(bits: &[usize]) -> usize {
    bits.iter().fold(0, |acc, &b| {
        debug_assert!(b < 2, "bit value must be 0 or 1, got {}", b);
        (acc << 1) | b
    })
}

/// Unpacks a basis index into per-qubit bits (qubit 0 first).
pub fn index_bits(index: usize, num_qubits: usize) -> Vec<usize> {
    (0..num_qubits).map(|q| bit_at(index, q, num_qubits)).collect()
}

/// Renders a basis index as a bit string with qubit 0 leftmost.
///
/// # Examples
/// ```
/// use ccx_tomography::index::format_bits;
///
/// assert_eq!(format_bits(6, 3), "110");
/// ```
pub fn format_bits(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}
