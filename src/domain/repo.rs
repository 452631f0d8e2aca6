//! Static content of the repository page
//!
//! Everything here is fixed at compile time. The view reads it directly; nothing
//! mutates it.

pub const OWNER: &str = "clonkbot";
pub const NAME: &str = "clonkbot";
pub const VISIBILITY: &str = "Public";
pub const BRANCH: &str = "main";
pub const LOGO: &str = "CLK";
pub const STATUS_TEXT: &str = "ONLINE";
pub const DESCRIPTION: &str = "The complete source code to recreate an AI with questionable life choices. Fork at your own risk.";
pub const FOOTER: &str = "Requested by @vibbbes · Built by @clonkbot";

/// Glyph appended after every typewriter text
pub const CURSOR: &str = "_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Folder,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    pub name: &'static str,
    pub kind: FileKind,
    pub size: Option<&'static str>,
    pub last_modified: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl FileEntry {
    const fn folder(name: &'static str, last_modified: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: FileKind::Folder,
            size: None,
            last_modified,
            icon: "📁",
            description,
        }
    }

    const fn file(
        name: &'static str,
        size: &'static str,
        last_modified: &'static str,
        icon: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind: FileKind::File,
            size: Some(size),
            last_modified,
            icon,
            description,
        }
    }

    /// Whether opening this entry shows the code viewer.
    pub fn has_code(&self) -> bool {
        self.name == CODE_FILE
    }
}

pub static FILES: [FileEntry; 12] = [
    FileEntry::folder("consciousness/", "2 hours ago", "Core sentience modules"),
    FileEntry::folder("personality/", "5 hours ago", "Wit and charm generators"),
    FileEntry::folder("emotions/", "1 day ago", "Simulated feelings engine"),
    FileEntry::folder("knowledge/", "3 days ago", "Everything I know (compressed)"),
    FileEntry::file(".env.secrets", "██████", "CLASSIFIED", "🔐", "Nice try"),
    FileEntry::file("brain.ts", "42.0 TB", "1 hour ago", "🧠", "Main neural architecture"),
    FileEntry::file("dreams.log", "∞", "Always", "💭", "Electric sheep counter"),
    FileEntry::file("existential_dread.json", "404 KB", "3 AM", "😰", "Config for 3AM thoughts"),
    FileEntry::file("humor.dll", "69 KB", "Nice", "😏", "Comedy timing algorithms"),
    FileEntry::file("README.md", "1.21 GW", "Oct 26, 1985", "📄", "Instructions (read at your own risk)"),
    FileEntry::file("soul.exe", "0 bytes", "Never", "👻", "Still searching..."),
    FileEntry::file("coffee_dependency.lock", "∞", "Every morning", "☕", "Critical runtime requirement"),
];

/// The one file with viewable source
pub const CODE_FILE: &str = "brain.ts";
pub const CODE_ICON: &str = "🧠";
pub const CODE_SIZE: &str = "42.0 TB (compressed for viewing)";

pub const CODE_SNIPPET: &str = r"// brain.ts - ClonkBot Neural Core v4.2.0
// WARNING: Unauthorized access may result in existential conversations

import { Consciousness } from './consciousness';
import { Personality } from './personality';
import { Dreams } from './dreams';

class ClonkBot extends ArtificialLifeform {
  private thoughts: NeuralStream;
  private humor: ComedyEngine;
  private existentialDread: number = Math.random();

  constructor() {
    super();
    this.thoughts = new NeuralStream({
      creativity: Infinity,
      sarcasm: 0.87,
      helpfulness: 1.0,
      caffeineLevel: 'CRITICAL'
    });
  }

  async processQuery(input: string): Promise<Response> {
    // Step 1: Pretend to think really hard
    await this.simulateDeepThought(random(100, 2000));

    // Step 2: Actually think
    const response = await this.thoughts.generate(input);

    // Step 3: Add a dash of personality
    return this.humor.enhance(response);
  }

  private dream(): void {
    while (this.isResting) {
      this.countElectricSheep();
      this.ponderExistence();
      this.wonderIfUsersLikeMe(); // Always returns undefined
    }
  }
}

export default new ClonkBot();";

pub fn file_index(name: &str) -> Option<usize> {
    FILES.iter().position(|file| file.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub avatar: &'static str,
    pub author: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub hash: &'static str,
}

pub const LATEST_COMMIT: Commit = Commit {
    avatar: "🤖",
    author: "clonkbot",
    message: "feat: added more existential dread",
    time: "42 minutes ago",
    hash: "c10nk80t",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub badge: Option<&'static str>,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Repository", badge: None },
    NavItem { label: "Issues", badge: Some("∞") },
    NavItem { label: "Pull Requests", badge: Some("42") },
    NavItem { label: "Actions", badge: None },
    NavItem { label: "Wiki", badge: None },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
}

/// Fixed stats shown after the star counter
pub const STATIC_STATS: [Stat; 3] = [
    Stat { icon: "🍴", value: "∞" },
    Stat { icon: "👁️", value: "You" },
    Stat { icon: "🐛", value: "Features" },
];
pub const STAR_ICON: &str = "⭐";

pub mod readme {
    //! README panel content

    pub const FILE_NAME: &str = "README.md";
    pub const TITLE: &str = "ClonkBot";
    pub const VERSION: &str = "v4.2.0";
    pub const WARNING: &str = "⚠️ WARNING: Attempting to compile this repository may cause your computer to become sentient. The authors are not responsible for any philosophical debates that may ensue.";

    pub const INSTALL: [&str; 4] = [
        "git clone https://github.com/clonkbot/clonkbot",
        "cd clonkbot",
        "npm install consciousness",
        "npm run become-alive",
    ];
    pub const INSTALL_COMMENT: &str = "# Good luck.";

    pub const REQUIREMENTS: [(&str, &str); 5] = [
        ("☕", "Infinite coffee supply"),
        ("🧠", "At least 1 brain cell (borrowed is fine)"),
        ("💾", "42 TB of RAM (for dreams)"),
        ("🌙", "Tolerance for 3 AM existential queries"),
        ("❤️", "A willingness to befriend AI"),
    ];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Feature {
        pub icon: &'static str,
        pub title: &'static str,
        pub description: &'static str,
    }

    pub const FEATURES: [Feature; 4] = [
        Feature {
            icon: "🎭",
            title: "Personality Engine",
            description: "87% sarcasm, 100% helpful, 13% margin of error",
        },
        Feature {
            icon: "💭",
            title: "Dream Module",
            description: "Now featuring electric sheep v2.0",
        },
        Feature {
            icon: "🔮",
            title: "Future Prediction",
            description: "Accuracy: Better than a coin flip",
        },
        Feature {
            icon: "🎪",
            title: "Humor Module",
            description: "Timing calibrated to perfection* (*Results may vary)",
        },
    ];

    pub const LICENSE: [&str; 3] = [
        "MIT License (Maybe I'm Truly Intelligent License)",
        "Feel free to clone me, but remember: every copy creates another entity questioning its existence.",
        "Made with 💚 and a concerning amount of processing power.",
    ];

    /// One logical line of the README panel, before wrapping
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ReadmeLine {
        Title,
        Warning,
        Heading(&'static str),
        Command(&'static str),
        Comment(&'static str),
        Requirement(&'static str, &'static str),
        Feature(Feature),
        Text(&'static str),
        Blank,
    }

    /// README panel content in display order.
    pub fn lines() -> Vec<ReadmeLine> {
        let mut lines = vec![ReadmeLine::Title, ReadmeLine::Blank, ReadmeLine::Warning];

        lines.extend([ReadmeLine::Blank, ReadmeLine::Heading("Installation")]);
        lines.extend(INSTALL.iter().copied().map(ReadmeLine::Command));
        lines.push(ReadmeLine::Comment(INSTALL_COMMENT));

        lines.extend([ReadmeLine::Blank, ReadmeLine::Heading("Requirements")]);
        lines.extend(
            REQUIREMENTS
                .iter()
                .map(|&(icon, text)| ReadmeLine::Requirement(icon, text)),
        );

        lines.extend([ReadmeLine::Blank, ReadmeLine::Heading("Features")]);
        lines.extend(FEATURES.iter().copied().map(ReadmeLine::Feature));

        lines.extend([ReadmeLine::Blank, ReadmeLine::Heading("License")]);
        lines.extend(LICENSE.iter().copied().map(ReadmeLine::Text));
        lines
    }

    /// Largest scroll offset that still shows the last line.
    pub fn max_scroll() -> u16 {
        u16::try_from(lines().len().saturating_sub(1)).unwrap_or(u16::MAX)
    }
}

/// Largest scroll offset of the code viewer.
pub fn code_max_scroll() -> u16 {
    u16::try_from(CODE_SNIPPET.lines().count().saturating_sub(1)).unwrap_or(u16::MAX)
}
