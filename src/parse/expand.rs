/// Marker expanded to the shell's own process id.
const PID_MARKER: &str = "$$";

/// Replaces every `$$` in the line with the decimal form of `pid`.
///
/// A lone `$` has no meaning and is left untouched. Once no marker
/// remains the transform is a no-op, so running it twice is safe.
pub fn expand_pid(line: &str, pid: u32) -> String {
    if !line.contains(PID_MARKER) {
        return line.to_string();
    }
    line.replace(PID_MARKER, &pid.to_string())
}
