//! Registration data a highlighter uses to pick this lexer.

/// Names and file associations of a lexer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexerInfo {
    pub tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub aliases: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

pub const PHP: LexerInfo = LexerInfo {
    tag: "php",
    title: "PHP",
    description: "The PHP scripting language (php.net)",
    aliases: &["php", "php3", "php4", "php5"],
    filenames: &[
        "*.php",
        "*.php[345t]",
        "*.phtml",
        "*.module",
        "*.inc",
        "*.profile",
        "*.install",
        "*.test",
    ],
    mimetypes: &["text/x-php"],
};

impl LexerInfo {
    /// Whether the last component of `path` matches one of the filename
    /// globs.
    pub fn matches_filename(&self, path: &str) -> bool {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        self.filenames.iter().any(|glob| glob_match(glob, name))
    }

    /// Tag or alias, ignoring ASCII case.
    pub fn matches_name(&self, name: &str) -> bool {
        self.tag.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    pub fn matches_mimetype(&self, mimetype: &str) -> bool {
        self.mimetypes.contains(&mimetype)
    }
}

/// Shell-style glob with `*`, `?` and `[...]` classes.
fn glob_match(glob: &str, name: &str) -> bool {
    let glob: Vec<char> = glob.chars().collect();
    let name: Vec<char> = name.chars().collect();
    let (mut g, mut n) = (0, 0);
    // Where to resume after the last `*`: (glob index after it, name index).
    let mut star: Option<(usize, usize)> = None;
    while n < name.len() {
        match glob.get(g) {
            Some('*') => {
                star = Some((g + 1, n));
                g += 1;
                continue;
            }
            Some('?') => {
                g += 1;
                n += 1;
                continue;
            }
            Some('[') => {
                if let Some((matched, next)) = match_class(&glob, g, name[n]) {
                    if matched {
                        g = next;
                        n += 1;
                        continue;
                    }
                } else if name[n] == '[' {
                    g += 1;
                    n += 1;
                    continue;
                }
            }
            Some(&c) if c == name[n] => {
                g += 1;
                n += 1;
                continue;
            }
            _ => {}
        }
        let Some((resume, at)) = star else {
            return false;
        };
        g = resume;
        n = at + 1;
        star = Some((resume, at + 1));
    }
    glob[g..].iter().all(|&c| c == '*')
}

/// Match `c` against the class opening at `glob[open]`. Returns whether it
/// matched and the index after the closing `]`, or `None` for an unclosed
/// class.
fn match_class(glob: &[char], open: usize, c: char) -> Option<(bool, usize)> {
    let mut i = open + 1;
    let negated = matches!(glob.get(i), Some('!' | '^'));
    if negated {
        i += 1;
    }
    let mut matched = false;
    let mut first = true;
    loop {
        let &lo = glob.get(i)?;
        if lo == ']' && !first {
            return Some((matched != negated, i + 1));
        }
        first = false;
        if glob.get(i + 1) == Some(&'-') && glob.get(i + 2).is_some_and(|&hi| hi != ']') {
            let hi = glob[i + 2];
            matched |= lo <= c && c <= hi;
            i += 3;
        } else {
            matched |= lo == c;
            i += 1;
        }
    }
}
