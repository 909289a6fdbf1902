/// One parsed command line, ready for the builtin dispatcher or the
/// process launcher.
///
/// `arguments` always starts with the program name so it can be handed
/// to exec-style APIs unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub arguments: Vec<String>,
    pub input_redirect: Option<String>,
    pub output_redirect: Option<String>,
    pub runs_in_foreground: bool,
}

impl Invocation {
    /// Splits an already-expanded line into an invocation.
    ///
    /// Tokens are runs of non-whitespace. `<` and `>` each consume the
    /// following token as a redirect target; a later redirect of the same
    /// direction overwrites an earlier one. A trailing `&` requests
    /// background execution, downgraded to foreground while
    /// `foreground_only` is set. Returns `None` for whitespace-only input.
    pub fn parse(line: &str, foreground_only: bool) -> Option<Self> {
        let mut tokens: Vec<&str> = line.split_whitespace().collect();

        let mut background_requested = false;
        if tokens.last() == Some(&"&") {
            tokens.pop();
            background_requested = true;
        }

        let program = (*tokens.first()?).to_string();
        let mut arguments = vec![program.clone()];
        let mut input_redirect = None;
        let mut output_redirect = None;

        let mut rest = tokens[1..].iter();
        while let Some(token) = rest.next() {
            match *token {
                "<" => input_redirect = rest.next().map(|t| (*t).to_string()),
                ">" => output_redirect = rest.next().map(|t| (*t).to_string()),
                _ => arguments.push((*token).to_string()),
            }
        }

        Some(Invocation {
            program,
            arguments,
            input_redirect,
            output_redirect,
            runs_in_foreground: !background_requested || foreground_only,
        })
    }
}
