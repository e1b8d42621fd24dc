//! Parameter card template and placeholder renderer.
//! Placeholders are `{name}`; `{{` and `}}` produce literal braces.
//! Rendering is strict: every placeholder must have a value and every value must be used.

use anyhow::{Result, bail};
use std::collections::HashSet;

/// Body of one parameter card. Everything outside the placeholders is read by the
/// downstream pipeline as-is, spacing around `=` included.
pub const PARAM_TEMPLATE: &str = "nevents= 1
avg-ic = on
afterburner = on
system-and-sqrts = {system_and_sqrts}
norm = {normalization}
centrality-def= entropy
centrality-low= {cent_low}
centrality-high= {cent_high}
nucleon-width= 0.96
tau-fs= {freestream_time}
trento-args= {trento_args}
grid-step=.1
hydro-args= stop=0.140 min=0.08 slope=1.1 curvature=-0.5 zetas_max=0.05 zetas_width=0.02 zetas_t0=0.180 iskip_t=4 iskip_xy=2
Tswitch= 0.151";

/// Formats a float the way the cards have always carried them: shortest
/// round-trip digits, always with a decimal point (`1.0`, not `1`).
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

/// Substitutes `values` into `template`.
pub fn render(template: &str, values: &[(&str, String)]) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut used = HashSet::new();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with('}') {
            bail!("Unmatched '}}' in template at byte {}", template.len() - tail.len());
        } else {
            let Some(end) = tail.find('}') else {
                bail!("Unterminated placeholder in template at byte {}", template.len() - tail.len());
            };
            let key = &tail[1..end];
            let Some((_, value)) = values.iter().find(|(k, _)| *k == key) else {
                bail!("Template placeholder '{{{}}}' has no value", key);
            };
            out.push_str(value);
            used.insert(key);
            rest = &tail[end + 1..];
        }
    }
    out.push_str(rest);

    if let Some((unused, _)) = values.iter().find(|(k, _)| !used.contains(k)) {
        bail!("Value '{}' supplied but template has no matching placeholder", unused);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic() {
        let out = render("a={a} b={b}", &[("a", "1".into()), ("b", "x y".into())]).unwrap();
        assert_eq!(out, "a=1 b=x y");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let out = render("{a}-{a}", &[("a", "7".into())]).unwrap();
        assert_eq!(out, "7-7");
    }

    #[test]
    fn test_render_escaped_braces() {
        let out = render("{{{a}}}", &[("a", "v".into())]).unwrap();
        assert_eq!(out, "{v}");
    }

    #[test]
    fn test_render_unknown_placeholder() {
        let err = render("{a} {missing}", &[("a", "1".into())]).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_render_unused_value() {
        let err = render("{a}", &[("a", "1".into()), ("extra", "2".into())]).unwrap_err();
        assert!(err.to_string().contains("extra"));
    }

    #[test]
    fn test_render_unterminated() {
        assert!(render("norm = {normalization", &[("normalization", "1".into())]).is_err());
        assert!(render("stray } brace", &[]).is_err());
    }

    #[test]
    fn test_template_placeholders() {
        let keys = [
            "system_and_sqrts",
            "normalization",
            "cent_low",
            "cent_high",
            "freestream_time",
            "trento_args",
        ];
        let values: Vec<(&str, String)> = keys.iter().map(|k| (*k, format!("<{}>", k))).collect();
        let out = render(PARAM_TEMPLATE, &values).unwrap();
        assert!(out.starts_with("nevents= 1\n"));
        assert!(out.ends_with("Tswitch= 0.151"));
        assert!(!out.contains('{'));
        assert_eq!(out.lines().count(), 14);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(13.9), "13.9");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(1.0), "1.0");
    }
}
