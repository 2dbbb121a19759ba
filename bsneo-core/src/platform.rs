/// A game system that scraped metadata can belong to.
///
/// The id is the short name used for storage folders, CLI arguments and the
/// `shortname` field of an exported collection; the display name becomes
/// the collection title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    id: &'static str,
    display_name: &'static str,
}

/// Every supported platform.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::new("3do", "3DO Interactive Multiplayer"),
    Platform::new("amiga", "Commodore Amiga"),
    Platform::new("amstradcpc", "Amstrad CPC"),
    Platform::new("android", "Android"),
    Platform::new("arcade", "Arcade"),
    Platform::new("atari2600", "Atari 2600"),
    Platform::new("atari5200", "Atari 5200"),
    Platform::new("atari7800", "Atari 7800"),
    Platform::new("atarijaguar", "Atari Jaguar"),
    Platform::new("atarijaguarcd", "Atari Jaguar CD"),
    Platform::new("atarilynx", "Atari Lynx"),
    Platform::new("atarixe", "Atari XEGS"),
    Platform::new("atarist", "Atari ST"),
    Platform::new("colecovision", "Colecovision"),
    Platform::new("adam", "Coleco ADAM"),
    Platform::new("c64", "Commodore 64"),
    Platform::new("c128", "Commodore 128"),
    Platform::new("amigacd32", "Commodore Amiga CD32"),
    Platform::new("amigacdtv", "Commodore Amiga CDTV"),
    Platform::new("vic20", "Commodore VIC-20"),
    Platform::new("intellivision", "Mattel Intellivision"),
    Platform::new("ios", "Apple iOS"),
    Platform::new("macintosh", "Apple macOS"),
    Platform::new("vectrex", "GCE Vectrex"),
    Platform::new("xbox", "Microsoft Xbox"),
    Platform::new("xbox360", "Microsoft Xbox 360"),
    Platform::new("xboxone", "Microsoft Xbox One"),
    Platform::new("xboxseries", "Microsoft Xbox Series X/S"),
    Platform::new("dos", "Microsoft DOS"),
    Platform::new("msx", "Microsoft MSX"),
    Platform::new("msx2", "Microsoft MSX2"),
    Platform::new("windows", "Microsoft Windows"),
    Platform::new("linux", "Linux"),
    Platform::new("ngp", "SNK Neo Geo Pocket"),
    Platform::new("ngpc", "SNK Neo Geo Pocket Color"),
    Platform::new("neogeo", "SNK Neo Geo"),
    Platform::new("3ds", "Nintendo 3DS"),
    Platform::new("n64", "Nintendo 64"),
    Platform::new("64dd", "Nintendo 64DD"),
    Platform::new("nds", "Nintendo DS"),
    Platform::new("nes", "Nintendo Entertainment System"),
    Platform::new("fds", "Famicom Disk System"),
    Platform::new("snes", "Super Nintendo Entertainment System"),
    Platform::new("gameandwatch", "Nintendo Game & Watch"),
    Platform::new("gb", "Nintendo Game Boy"),
    Platform::new("gba", "Nintendo Game Boy Advance"),
    Platform::new("gbc", "Nintendo Game Boy Color"),
    Platform::new("gc", "Nintendo GameCube"),
    Platform::new("virtualboy", "Nintendo Virtual Boy"),
    Platform::new("wii", "Nintendo Wii"),
    Platform::new("wiiu", "Nintendo Wii U"),
    Platform::new("switch", "Nintendo Switch"),
    Platform::new("ouya", "Ouya"),
    Platform::new("cdi", "Philips CD-i"),
    Platform::new("pico8", "Pico-8"),
    Platform::new("sega32x", "Sega 32X"),
    Platform::new("segacd", "Sega CD"),
    Platform::new("dreamcast", "Sega Dreamcast"),
    Platform::new("gamegear", "Sega Game Gear"),
    Platform::new("genesis", "Sega Genesis"),
    Platform::new("megadrive", "Sega Mega Drive"),
    Platform::new("mastersystem", "Sega Master System"),
    Platform::new("naomi", "Sega NAOMI"),
    Platform::new("naomi2", "Sega NAOMI 2"),
    Platform::new("saturn", "Sega Saturn"),
    Platform::new("sg1000", "Sega SG-1000"),
    Platform::new("zxspectrum", "Sinclair ZX Spectrum"),
    Platform::new("psx", "Sony Playstation"),
    Platform::new("ps2", "Sony Playstation 2"),
    Platform::new("ps3", "Sony Playstation 3"),
    Platform::new("ps4", "Sony Playstation 4"),
    Platform::new("ps5", "Sony Playstation 5"),
    Platform::new("psvita", "Sony Playstation Vita"),
    Platform::new("psp", "Sony Playstation Portable"),
    Platform::new("ti99", "Texas Instruments TI-99/4A"),
    Platform::new("turbografx16", "NEC TurboGrafx-16"),
    Platform::new("turbografxcd", "NEC TurboGrafx-CD"),
    Platform::new("pcengine", "NEC PC-Engine"),
    Platform::new("wonderswan", "WonderSwan"),
    Platform::new("wonderswancolor", "WonderSwan Color"),
    Platform::new("odyssey2", "Magnavox Odyssey 2"),
    Platform::new("odyssey", "Magnavox Odyssey"),
    Platform::new("channelf", "Fairchild Channel F"),
    Platform::new("gamecom", "Tiger Game.com"),
    Platform::new("apple2", "Apple II"),
];

impl Platform {
    const fn new(id: &'static str, display_name: &'static str) -> Self {
        Self { id, display_name }
    }

    /// Canonical short id (e.g. `"snes"`, `"psx"`).
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Look up a platform by its exact short id.
    pub fn from_id(id: &str) -> Option<Self> {
        ALL_PLATFORMS.iter().copied().find(|p| p.id == id)
    }

    /// All platforms in table order.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from its short id (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::from_id(&lower).ok_or_else(|| PlatformParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
