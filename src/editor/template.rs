use std::collections::BTreeMap;

/// A named HTML snippet insertable from the toolbar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pub title: &'static str,
    pub html: &'static str,
}

pub(crate) const TEMPLATES: &[Template] = &[
    Template {
        title: "Signature",
        html: "<p>Regards,<br>{$username} (staff id {$staffid})</p>",
    },
    Template {
        title: "Meeting notes",
        html: "<h2>Meeting notes</h2><p>Taken by {$username}</p><ul><li>Agenda</li></ul>",
    },
];

pub(crate) fn default_template_values() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("username".to_string(), "Some User".to_string()),
        ("staffid".to_string(), "991234".to_string()),
    ])
}

/// Replace every `{$key}` placeholder with its value. Unknown keys and
/// unterminated placeholders are kept verbatim; an opener without its own
/// closing brace does not hide a placeholder nested after it.
pub fn expand_template(html: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find("{$") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        // `{$a{$b}`: the outer opener is literal, rescan from the inner one.
        if let Some(inner) = key.find("{$") {
            out.push_str(&rest[start..start + 2 + inner]);
            rest = &after[inner..];
            continue;
        }

        match values.get(key) {
            Some(v) => out.push_str(v),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_keys() {
        let v = default_template_values();
        assert_eq!(expand_template("{$username}", &v), "Some User");
        assert_eq!(
            expand_template("<p>{$username} / {$staffid}</p>", &v),
            "<p>Some User / 991234</p>"
        );
    }

    #[test]
    fn test_expand_keeps_unknown_and_unterminated() {
        let v = default_template_values();
        assert_eq!(expand_template("a {$nope} b", &v), "a {$nope} b");
        assert_eq!(expand_template("tail {$username", &v), "tail {$username");
        assert_eq!(expand_template("no placeholders", &v), "no placeholders");
    }

    #[test]
    fn test_expand_inside_unclosed_opener() {
        let v = default_template_values();
        assert_eq!(expand_template("{$x{$username}", &v), "{$xSome User");
        assert_eq!(expand_template("{${$staffid}}", &v), "{$991234}");
        assert_eq!(expand_template("{$a{$b{$username}!", &v), "{$a{$bSome User!");
    }

    #[test]
    fn test_builtin_templates_expand_fully() {
        let v = default_template_values();
        for t in TEMPLATES {
            assert!(!expand_template(t.html, &v).contains("{$"), "{}", t.title);
        }
    }
}
