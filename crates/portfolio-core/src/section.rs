use crate::error::PortfolioError;
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

/// One of the six portfolio categories reachable from the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Contact,
    SocialLife,
    Resume,
}

/// Immutable description of a section: label, face color and outward direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub color_hex: u32,
    pub direction: [f32; 3],
}

/// Sections in face-construction order.
pub const SECTIONS: [Section; 6] = [
    Section {
        id: SectionId::About,
        color_hex: 0x3b82f6,
        direction: [0.0, 0.0, 1.0],
    },
    Section {
        id: SectionId::Projects,
        color_hex: 0x10b981,
        direction: [1.0, 0.0, 0.0],
    },
    Section {
        id: SectionId::Skills,
        color_hex: 0xf59e0b,
        direction: [0.0, 0.0, -1.0],
    },
    Section {
        id: SectionId::Contact,
        color_hex: 0xef4444,
        direction: [-1.0, 0.0, 0.0],
    },
    Section {
        id: SectionId::SocialLife,
        color_hex: 0x60a5fa,
        direction: [0.0, 1.0, 0.0],
    },
    Section {
        id: SectionId::Resume,
        color_hex: 0x06b6d4,
        direction: [0.0, -1.0, 0.0],
    },
];

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
        SectionId::SocialLife,
        SectionId::Resume,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
            SectionId::SocialLife => "Social Life",
            SectionId::Resume => "Resume",
        }
    }

    pub fn section(self) -> &'static Section {
        // SECTIONS is declared in the same order as ALL
        &SECTIONS[self.index()]
    }

    pub fn index(self) -> usize {
        match self {
            SectionId::About => 0,
            SectionId::Projects => 1,
            SectionId::Skills => 2,
            SectionId::Contact => 3,
            SectionId::SocialLife => 4,
            SectionId::Resume => 5,
        }
    }
}

impl Section {
    pub fn color_rgb(&self) -> [f32; 3] {
        let h = self.color_hex;
        [
            ((h >> 16) & 0xff) as f32 / 255.0,
            ((h >> 8) & 0xff) as f32 / 255.0,
            (h & 0xff) as f32 / 255.0,
        ]
    }

    /// CSS hex notation, e.g. `#ef4444`.
    pub fn css_color(&self) -> String {
        format!("#{:06x}", self.color_hex)
    }

    #[inline]
    pub fn direction_vec3(&self) -> Vec3 {
        Vec3::from_array(self.direction)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SectionId {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.label() == s)
            .ok_or_else(|| PortfolioError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_ids() {
        for id in SectionId::ALL {
            assert_eq!(id.label().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "Blog".parse::<SectionId>(),
            Err(PortfolioError::UnknownSection("Blog".into()))
        );
    }

    #[test]
    fn sections_cover_every_axis_once() {
        let mut seen = Vec::new();
        for (i, s) in SECTIONS.iter().enumerate() {
            assert_eq!(s.id.index(), i);
            let d = s.direction_vec3();
            assert!((d.length() - 1.0).abs() < 1e-6);
            assert!(!seen.contains(&s.direction));
            seen.push(s.direction);
        }
    }

    #[test]
    fn hex_colors_decode() {
        let contact = SectionId::Contact.section();
        assert_eq!(contact.color_rgb(), [239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0]);
        assert_eq!(contact.css_color(), "#ef4444");
        assert_eq!(SectionId::Resume.section().css_color(), "#06b6d4");
    }
}
