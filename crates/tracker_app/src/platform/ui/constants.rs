pub const PROMPT: &str = "> ";

pub const HELP_TEXT: &str = "\
Commands:
  search <text>   filter by title, company or location (applies after a short pause)
  clear           clear the search
  source <value>  pick a source chip (all, or a listed source)
  status <value>  pick a status chip (all, pending, applied, failed, rejected)
  next | n        next page
  prev | p        previous page
  refresh | r     reload stats, sources and the current page
  apply <id>      mark a job as applied and show its link
  html            print the current page as HTML cards
  help | ?        show this help
  quit | q        exit";

/// Width of the horizontal rules framing a render.
pub const RULE_WIDTH: usize = 72;
