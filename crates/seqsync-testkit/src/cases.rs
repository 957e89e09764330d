//! Exhaustive small-input generators.

/// Every arrangement of distinct alphabet letters of length `0..=max_len`.
pub fn distinct_sequences<T: Clone>(alphabet: &[T], max_len: usize) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut used = vec![false; alphabet.len()];
    let mut current = Vec::new();
    arrange(alphabet, max_len, &mut used, &mut current, &mut out);
    out
}

fn arrange<T: Clone>(
    alphabet: &[T],
    max_len: usize,
    used: &mut [bool],
    current: &mut Vec<T>,
    out: &mut Vec<Vec<T>>,
) {
    out.push(current.clone());
    if current.len() == max_len {
        return;
    }
    for i in 0..alphabet.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(alphabet[i].clone());
        arrange(alphabet, max_len, used, current, out);
        current.pop();
        used[i] = false;
    }
}

/// Every word over `alphabet` of length `0..=max_len`, repeats allowed.
pub fn words<T: Clone>(alphabet: &[T], max_len: usize) -> Vec<Vec<T>> {
    let mut out = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for word in &frontier {
            for letter in alphabet {
                let mut w: Vec<T> = word.clone();
                w.push(letter.clone());
                next.push(w);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

/// Size of the multiset intersection of `a` and `b`.
pub fn common_count<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut claimed = vec![false; b.len()];
    let mut k = 0;
    for item in a {
        if let Some(j) = (0..b.len()).find(|&j| !claimed[j] && b[j] == *item) {
            claimed[j] = true;
            k += 1;
        }
    }
    k
}
