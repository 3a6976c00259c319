//! Coordinate arithmetic on a wrapping grid

/// `value mod size`, always in `[0, size)` even for negative input.
#[inline]
pub fn wrap_index(value: i32, size: usize) -> usize {
    value.rem_euclid(size as i32) as usize
}

/// Greatest common divisor; never returns 0 so it is safe as a divisor.
pub fn gcd(a: usize, b: usize) -> usize {
    let (mut x, mut y) = (a, b);
    while y != 0 {
        let next = x % y;
        x = y;
        y = next;
    }
    x.max(1)
}

pub fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

/// Period of stepping by `step` along an axis of `size` cells.
fn axis_period(size: usize, step: i32) -> usize {
    if step == 0 {
        1
    } else {
        size / gcd(size, step.unsigned_abs() as usize)
    }
}

/// Number of `(di, dj)` steps that bring a walk on a `u_size` x `v_size`
/// torus back to its starting cell.
///
/// A line scan through a cell never needs more than `cycle_length - 1` steps
/// in one direction; any further step revisits the start.
pub fn cycle_length(u_size: usize, v_size: usize, di: i32, dj: i32) -> usize {
    lcm(axis_period(u_size, di), axis_period(v_size, dj))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, 16), 0);
        assert_eq!(wrap_index(15, 16), 15);
        assert_eq!(wrap_index(16, 16), 0);
        assert_eq!(wrap_index(-1, 16), 15);
        assert_eq!(wrap_index(-17, 16), 15);
        assert_eq!(wrap_index(-8, 8), 0);
        assert_eq!(wrap_index(35, 8), 3);
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(16, 8), 8);
        assert_eq!(gcd(16, 6), 2);
        assert_eq!(gcd(0, 0), 1);
        assert_eq!(lcm(16, 8), 16);
        assert_eq!(lcm(4, 6), 12);
    }

    #[test]
    fn test_cycle_length_default_board() {
        assert_eq!(cycle_length(16, 8, 1, 0), 16);
        assert_eq!(cycle_length(16, 8, 0, 1), 8);
        assert_eq!(cycle_length(16, 8, 1, 1), 16);
        assert_eq!(cycle_length(16, 8, 1, -1), 16);
        assert_eq!(cycle_length(16, 8, 0, 0), 1);
    }

    #[test]
    fn test_cycle_length_coprime_sizes() {
        assert_eq!(cycle_length(5, 3, 1, 1), 15);
        assert_eq!(cycle_length(6, 4, 2, 1), 12);
        assert_eq!(cycle_length(6, 4, -3, 2), 2);
    }

    #[test]
    fn test_cycle_returns_to_start() {
        for u in 1..=9usize {
            for v in 1..=9usize {
                for di in -3..=3i32 {
                    for dj in -3..=3i32 {
                        let n = cycle_length(u, v, di, dj) as i32;
                        for (si, sj) in [(0i32, 0i32), (u as i32 - 1, v as i32 - 1), (2, 1)] {
                            let end_i = wrap_index(si + di * n, u);
                            let end_j = wrap_index(sj + dj * n, v);
                            assert_eq!(
                                (end_i, end_j),
                                (wrap_index(si, u), wrap_index(sj, v)),
                                "u={u} v={v} step=({di},{dj})"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_cycle_is_minimal() {
        for u in 1..=9usize {
            for v in 1..=9usize {
                for di in -3..=3i32 {
                    for dj in -3..=3i32 {
                        let n = cycle_length(u, v, di, dj) as i32;
                        for k in 1..n {
                            let back_home = wrap_index(di * k, u) == 0 && wrap_index(dj * k, v) == 0;
                            assert!(!back_home, "u={u} v={v} step=({di},{dj}) returned after {k}");
                        }
                    }
                }
            }
        }
    }
}
