use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two identifiers so that embedded numbers order by value
///
/// Strings are read as a sequence of tokens: maximal runs of ASCII digits and single
/// non-digit characters. Digit runs compare by numeric magnitude, so `"p2"` orders before
/// `"p10"`. Other characters compare by class first (whitespace and punctuation, then
/// digits, then letters) and then case-insensitively.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use catalog_indexer::natural_cmp;
///
/// assert_eq!(natural_cmp("v84_2", "v84_10"), Ordering::Less);
/// assert_eq!(natural_cmp("Aarti", "aarti"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let ordering = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let left_run = take_digit_run(&mut left);
                let right_run = take_digit_run(&mut right);
                compare_digit_runs(&left_run, &right_run)
            }
            (Some(l), Some(r)) => {
                left.next();
                right.next();
                compare_chars(l, r)
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn take_digit_run(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Compare two digit runs by value without parsing them into a fixed-width integer
fn compare_digit_runs(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

fn compare_chars(left: char, right: char) -> Ordering {
    char_class(left).cmp(&char_class(right)).then_with(|| fold_case(left).cmp(&fold_case(right)))
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() || c.is_ascii_punctuation() {
        0
    } else if c.is_ascii_digit() {
        1
    } else {
        2
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
