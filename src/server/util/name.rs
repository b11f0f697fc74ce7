/// Joins name parts as "Last First Middle", skipping an absent or blank middle name.
pub fn full_name(last_name: &str, name: &str, middle_name: Option<&str>) -> String {
    match middle_name.map(str::trim).filter(|m| !m.is_empty()) {
        Some(middle) => format!("{} {} {}", last_name, name, middle),
        None => format!("{} {}", last_name, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_middle_name_when_present() {
        assert_eq!(
            full_name("Petrov", "Ivan", Some("Sergeevich")),
            "Petrov Ivan Sergeevich"
        );
    }

    #[test]
    fn omits_blank_middle_name() {
        assert_eq!(full_name("Petrov", "Ivan", Some(" ")), "Petrov Ivan");
        assert_eq!(full_name("Petrov", "Ivan", None), "Petrov Ivan");
    }
}
