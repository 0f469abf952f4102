//! The portfolio as authored

use crate::domain::entities::{ContactLink, ContentCatalog, Profile, Project, Tool};
use crate::domain::value_objects::Section;

pub fn catalog() -> ContentCatalog {
    ContentCatalog {
        profile: profile(),
        projects: projects(),
        tools: tools(),
        landmarks: Vec::new(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Naamya Goel".to_string(),
        initials: "NG".to_string(),
        role: "Digital Creator".to_string(),
        headline: "I am a creative technologist who believes interfaces should be as engaging as \
                   games. By merging technical precision with artistic spontaneity, I build digital \
                   worlds that invite curiosity and deliver impact."
            .to_string(),
        quote: "A digital architect bridging the gap between raw technical systems and refined \
                visual narratives."
            .to_string(),
        bio: vec![
            "Based in the intersection of design and development, I specialize in creating \
             immersive digital experiences that feel as precise as they are expressive."
                .to_string(),
            "My work is driven by a fascination with systems: how they break, how they scale, and \
             how they can be humanized through thoughtful typography and motion."
                .to_string(),
        ],
        portrait: "https://i.ibb.co/5hbtkfX0/Whats-App-Image-2026-01-28-at-11-56-33-AM.jpg"
            .to_string(),
        location: "Global_Node // Remote".to_string(),
        contacts: vec![
            ContactLink::new("Email", "mailto:hello@naamyagoel.com"),
            ContactLink::new("Instagram", "#"),
            ContactLink::new("LinkedIn", "#"),
        ],
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "Eco Branding 2024",
            Section::Branding,
            "Sustainable Identity",
            "A complete visual identity project for a renewable energy startup.",
            "https://images.unsplash.com/photo-1586717791821-3f44a563eb4c?auto=format&fit=crop&q=80&w=1200",
        )
        .with_long_description(
            "This project explores the intersection of organic forms and industrial precision. We \
             developed a custom modular typeface and a color system derived from satellite imagery \
             of protected biomes. The goal was to move away from typical 'green' tropes toward a \
             high-end, architectural interpretation of sustainability.",
        )
        .with_images([
            "https://images.unsplash.com/photo-1626785774573-4b799315345d?auto=format&fit=crop&q=80&w=800",
            "https://images.unsplash.com/photo-1634942537034-2531766767d1?auto=format&fit=crop&q=80&w=800",
            "https://images.unsplash.com/photo-1561070791-2526d30994b5?auto=format&fit=crop&q=80&w=800",
        ])
        .with_tech(["Illustrator", "Branding", "Concept Strategy"]),
        Project::new(
            "Cyberpunk Type",
            Section::Typography,
            "Variable Font Experiments",
            "An exploration of variable fonts in a futuristic context.",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?auto=format&fit=crop&q=80&w=1200",
        )
        .with_long_description(
            "A study in fluid legibility. Using OpenType variable features, we created a typeface \
             that reacts to UI states. As the user scrolls or interacts, the weight and slant of \
             the characters shift to mirror the physical friction of a digital interface.",
        )
        .with_images([
            "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&q=80&w=800",
            "https://images.unsplash.com/photo-1614850523459-c2f4c699c52e?auto=format&fit=crop&q=80&w=800",
        ])
        .with_tech(["Glyphs App", "CSS Variable Fonts", "Motion Design"]),
        Project::new(
            "Neon Interface",
            Section::Web,
            "Immersive Web Design",
            "UX/UI design for a music streaming platform.",
            "https://images.unsplash.com/photo-1497215728101-856f4ea42174?auto=format&fit=crop&q=80&w=1200",
        )
        .with_long_description(
            "A high-fidelity prototype focused on sensory feedback. The interface uses \
             depth-mapping and glassmorphism to create a tactile sense of space. Every transition \
             is modeled on real-world light refraction to enhance the 'premium' feel of the \
             platform.",
        )
        .with_images([
            "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?auto=format&fit=crop&q=80&w=800",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&get=80&w=800",
            "https://images.unsplash.com/photo-1551033406-611cf9a28f67?auto=format&fit=crop&q=80&w=800",
        ])
        .with_tech(["Figma", "React", "WebGL Shaders"]),
        Project::new(
            "Kinetic Motion",
            Section::Motion,
            "Dynamic Storytelling",
            "A series of abstract motion graphics exploring geometry and rhythm.",
            "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?auto=format&fit=crop&q=80&w=1200",
        )
        .with_long_description(
            "This series serves as a visual playground for physics-based animation. Each piece \
             starts with a simple primitive (a cube, a sphere, a line) and subjects it to complex \
             mathematical forces like Lorenz attractors and Perlin noise.",
        )
        .with_images([
            "https://images.unsplash.com/photo-1550684847-75bdda21cc95?auto=format&fit=crop&q=80&w=800",
            "https://images.unsplash.com/photo-1515462277126-2dd0c162007a?auto=format&fit=crop&q=80&w=800",
        ])
        .with_tech(["After Effects", "Cinema 4D", "X-Particles"]),
    ]
}

fn tools() -> Vec<Tool> {
    vec![
        Tool::new("Figma", "Design", 95),
        Tool::new("Adobe Suite", "Creative", 90),
        Tool::new("React", "Development", 85),
        Tool::new("TypeScript", "Development", 80),
        Tool::new("Tailwind CSS", "Styling", 95),
        Tool::new("Framer Motion", "Animation", 85),
        Tool::new("Three.js", "3D/Web", 70),
        Tool::new("Git", "System", 90),
    ]
}
