/// Calls `callback` with every `k`-combination of the indices `0..n`, in
/// lexicographic order. `k == 0` yields the empty combination once.
pub fn for_each_combination<F>(n: usize, k: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    let mut current: Vec<usize> = (0..k).collect();
    loop {
        callback(&current);

        // Rightmost position that can still move forward.
        let Some(pos) = (0..k).rev().find(|&i| current[i] < n - k + i) else {
            return;
        };
        current[pos] += 1;
        for i in pos + 1..k {
            current[i] = current[i - 1] + 1;
        }
    }
}

/// Number of `k`-combinations of `n` items, saturating at `usize::MAX`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = match result.checked_mul(n - i) {
            Some(product) => product / (i + 1),
            None => return usize::MAX,
        };
    }
    result
}
