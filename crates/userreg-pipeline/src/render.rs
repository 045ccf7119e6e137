use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serialize `value` with `indent` spaces per level. Zero emits compact JSON.
pub(crate) fn to_indented_json<T>(value: &T, indent: usize) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    if indent == 0 {
        return serde_json::to_string(value);
    }

    let indent = vec![b' '; indent];
    let mut out = Vec::with_capacity(256);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer)?;

    // serde_json only writes UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
