use super::frequency::FrequencyTable;

/// A word chosen for display together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedEntry {
    pub word: String,
    pub count: usize,
}

/// The outcome of top-N selection: the chosen entries in alphabetical
/// order, plus the largest and smallest counts among the chosen words.
/// The selection owns its data and never aliases the table it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub entries: Vec<SelectedEntry>,
    pub max: usize,
    pub min: usize,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedEntry> {
        self.entries.iter()
    }
}

/// Picks the `requested` most frequent distinct words from `table`.
///
/// Ranking sorts by count descending; equal counts keep the table's
/// lexicographic order (the sort is stable), so ties resolve
/// alphabetically. The slot accounting is the historical one:
///
/// - the top pair is always taken and fixes `max`;
/// - `min(requested, total) - 2` further pairs follow in rank order
///   (saturating at zero);
/// - if any pair remains unconsumed and `requested != 1`, exactly one more
///   is taken and fixes `min`; otherwise `min = max`.
///
/// For `requested >= 2` that yields exactly `min(requested, total)`
/// entries; `requested == 1` yields one entry; `requested == 0` still
/// yields the top pair, plus the trailing `min` pair when the vocabulary
/// has a second word. An empty table yields an empty selection with
/// `max == min == 0`.
pub fn select(table: &FrequencyTable, requested: usize) -> Selection {
    let mut ranked: Vec<(&str, usize)> = table.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    if ranked.is_empty() {
        return Selection {
            entries: Vec::new(),
            max: 0,
            min: 0,
        };
    }

    let total = ranked.len();
    let (top, max) = ranked[0];
    let mut entries = vec![SelectedEntry {
        word: top.to_string(),
        count: max,
    }];

    // The top pair holds one slot and the trailing min pair holds another;
    // the middle takes whatever slots remain.
    let middle = requested.min(total).saturating_sub(2);
    for &(word, count) in &ranked[1..1 + middle] {
        entries.push(SelectedEntry {
            word: word.to_string(),
            count,
        });
    }

    let min = match ranked.get(1 + middle) {
        Some(&(word, count)) if requested != 1 => {
            entries.push(SelectedEntry {
                word: word.to_string(),
                count,
            });
            count
        }
        _ => max,
    };

    // Words are lowercased during accumulation, so plain string order is
    // already case-insensitive alphabetical order.
    entries.sort_by(|a, b| a.word.cmp(&b.word));

    Selection { entries, max, min }
}
