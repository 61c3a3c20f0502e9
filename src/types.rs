/// Return a 'minimal' representation of the given number, rounded to
/// two decimal places: "50", "12.5", "33.33".
pub fn fstr(x: f64) -> String {
    let x = (x * 100.).round() / 100.;
    if x == x.trunc() {
        // also normalises -0 to "0"
        return format!("{}", x as i64);
    }
    let result = format!("{x:.2}");
    if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.').into()
    } else {
        result
    }
}
