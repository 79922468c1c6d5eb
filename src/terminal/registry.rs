use std::collections::HashMap;

use serde::Serialize;

use super::{CommandResult, LineKind, OutputLine, seg};
use crate::content::SiteContent;

/// Handlers are pure: content + args in, a `CommandResult` out. They never
/// touch the session and never navigate themselves.
pub type Handler = fn(&SiteContent, &[String]) -> CommandResult;

/// One row of the command table. Drives `help` output and the `commands`
/// CLI listing, so descriptions cannot drift from what is registered.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CommandDef {
    pub name: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
}

pub fn command_defs() -> Vec<CommandDef> {
    vec![
        CommandDef {
            name: "help",
            usage: "help",
            help: "List available commands",
        },
        CommandDef {
            name: "fetch",
            usage: "fetch <resource>",
            help: "Fetch a page (projects, blog, about, ...)",
        },
        CommandDef {
            name: "whoami",
            usage: "whoami",
            help: "About me",
        },
        CommandDef {
            name: "pwd",
            usage: "pwd",
            help: "Print working directory",
        },
        CommandDef {
            name: "clear",
            usage: "clear",
            help: "Clear terminal output",
        },
        CommandDef {
            name: "sudo",
            usage: "sudo",
            help: "Escalate privileges",
        },
        CommandDef {
            name: "exit",
            usage: "exit",
            help: "Leave the terminal",
        },
        CommandDef {
            name: "npm",
            usage: "npm",
            help: "Package tooling",
        },
        CommandDef {
            name: "curl",
            usage: "curl",
            help: "Transfer a URL",
        },
    ]
}

/// Name-to-handler mapping. Lookup is exact on the already-lowercased name;
/// `register` is the extension point for host-specific commands.
pub struct Registry {
    handlers: HashMap<&'static str, Handler>,
}

impl Registry {
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
        };
        registry.register("help", cmd_help);
        registry.register("fetch", cmd_fetch);
        registry.register("whoami", cmd_whoami);
        registry.register("pwd", cmd_pwd);
        registry.register("clear", cmd_clear);
        registry.register("sudo", cmd_sudo);
        registry.register("exit", cmd_exit);
        registry.register("npm", cmd_npm);
        registry.register("curl", cmd_curl);
        registry
    }

    pub fn register(&mut self, name: &'static str, handler: Handler) {
        self.handlers.insert(name, handler);
    }

    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }
}

/// Resources `fetch` resolves, in the order the usage hint lists them.
const FETCH_ROUTES: &[(&str, &str)] = &[
    ("projects", "/projects"),
    ("blog", "/posts"),
    ("posts", "/posts"),
    ("about", "/about"),
    ("contact", "/contact"),
    ("status", "/status"),
    ("home", "/"),
];

fn cmd_help(_content: &SiteContent, _args: &[String]) -> CommandResult {
    let mut lines = vec![OutputLine::output("Available commands:"), OutputLine::blank()];
    for def in command_defs() {
        lines.push(OutputLine::from_segments(
            LineKind::Output,
            vec![
                seg(LineKind::Info, format!("  {:<18}", def.usage)),
                seg(LineKind::Output, def.help),
            ],
        ));
    }
    lines.push(OutputLine::blank());
    CommandResult::lines(lines)
}

fn cmd_fetch(_content: &SiteContent, args: &[String]) -> CommandResult {
    let Some(resource) = args.first() else {
        return CommandResult::lines(vec![
            OutputLine::info("Usage: fetch <resource>"),
            OutputLine::info("Try: fetch projects, fetch blog, fetch about, fetch contact"),
        ]);
    };

    let key = resource.to_lowercase();
    if let Some((_, path)) = FETCH_ROUTES.iter().find(|(name, _)| *name == key) {
        return CommandResult {
            lines: vec![OutputLine::from_segments(
                LineKind::Output,
                vec![
                    seg(LineKind::Output, format!("GET {}  ", path)),
                    seg(LineKind::Success, "200 OK"),
                ],
            )],
            navigate_to: Some((*path).to_string()),
            clear_screen: false,
        };
    }

    CommandResult::lines(vec![
        OutputLine::from_segments(
            LineKind::Output,
            vec![
                seg(LineKind::Output, format!("GET /api/{}  ", resource)),
                seg(LineKind::Error, "404 Not Found"),
            ],
        ),
        OutputLine::blank(),
        OutputLine::from_segments(
            LineKind::Output,
            vec![
                seg(
                    LineKind::Output,
                    format!("No resource matching \"{}\". Try ", resource),
                ),
                seg(LineKind::Info, "fetch projects"),
                seg(LineKind::Output, " to see all."),
            ],
        ),
        OutputLine::blank(),
    ])
}

fn cmd_whoami(content: &SiteContent, _args: &[String]) -> CommandResult {
    let identity = &content.identity;
    let mut lines = vec![
        OutputLine::blank(),
        OutputLine::new(LineKind::Accent, format!("  {}", identity.name)),
    ];
    for bio in &identity.bio {
        lines.push(OutputLine::output(format!("  {}", bio)));
    }
    lines.push(OutputLine::blank());
    lines.push(OutputLine::from_segments(
        LineKind::Output,
        vec![
            seg(LineKind::Output, "  Email:  "),
            seg(LineKind::Info, identity.email.as_str()),
        ],
    ));
    lines.push(OutputLine::blank());
    CommandResult::lines(lines)
}

fn cmd_pwd(content: &SiteContent, _args: &[String]) -> CommandResult {
    CommandResult::lines(vec![OutputLine::new(
        LineKind::Input,
        content.identity.home.clone(),
    )])
}

fn cmd_clear(_content: &SiteContent, _args: &[String]) -> CommandResult {
    CommandResult {
        lines: Vec::new(),
        navigate_to: None,
        clear_screen: true,
    }
}

fn cmd_sudo(_content: &SiteContent, _args: &[String]) -> CommandResult {
    CommandResult::lines(vec![OutputLine::error("Nice try. Permission denied.")])
}

fn cmd_exit(_content: &SiteContent, _args: &[String]) -> CommandResult {
    CommandResult::lines(vec![
        OutputLine::output("You can check out any time you like,"),
        OutputLine::output("but you can never leave."),
        OutputLine::blank(),
    ])
}

fn cmd_npm(_content: &SiteContent, _args: &[String]) -> CommandResult {
    CommandResult::lines(vec![OutputLine::info("We use cargo here.")])
}

fn cmd_curl(_content: &SiteContent, _args: &[String]) -> CommandResult {
    CommandResult::lines(vec![
        OutputLine::output("HTTP/1.1 200 OK"),
        OutputLine::output("content-type: text/plain; charset=utf-8"),
        OutputLine::blank(),
        OutputLine::from_segments(
            LineKind::Output,
            vec![
                seg(LineKind::Output, "Why curl when you can "),
                seg(LineKind::Info, "fetch"),
                seg(LineKind::Output, "?"),
            ],
        ),
        OutputLine::blank(),
    ])
}

#[cfg(test)]
#[path = "../tests/terminal/registry_tests.rs"]
mod tests;
