use crossterm::style::Color;

pub struct Theme {
    pub fg: Color,
    pub banner: Color,  // Blue
    pub heading: Color, // Yellow
    pub hazard: Color,  // Red
    pub success: Color, // Green
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb { r: 205, g: 214, b: 244 },
    banner: Color::Rgb { r: 137, g: 180, b: 250 },
    heading: Color::Rgb { r: 249, g: 226, b: 175 },
    hazard: Color::Rgb { r: 243, g: 139, b: 168 },
    success: Color::Rgb { r: 166, g: 227, b: 161 },
};
