/// Split text into space-separated groups of `size` characters.
/// Never leaves a trailing separator. A size of 0 disables grouping.
pub fn group(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + text.len() / size);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && i % size == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Traditional five-letter cipher groups
pub fn group5(text: &str) -> String {
    group(text, 5)
}
