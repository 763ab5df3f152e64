use super::AppTheme;

/// Slate - Blue-gray field tool palette (Default theme)
/// Cool slate surfaces with a terminal-green result panel
pub fn slate() -> AppTheme {
    AppTheme::from_hex(
        "Slate",
        0x002D_3E50, // bg_base - Slate blue
        0x003A_4F63, // bg_header - Lighter banner
        0x003A_4F63, // bg_surface - Input section
        0x004A_5F73, // bg_elevated - Inputs
        0x005A_6F83, // bg_hover - Input hover
        0x00FF_FFFF, // fg_primary - White
        0x00D1_D5DB, // fg_secondary - Light gray
        0x009C_A3AF, // fg_muted - Label gray
        0x00FF_FFFF, // fg_on_accent - White on buttons
        0x0000_66CC, // accent - Action blue
        0x0000_52A3, // accent_hover - Deeper blue
        0x0028_A745, // success - Copy green
        0x0021_8838, // success_hover - Deeper green
        0x004A_5F73, // neutral - Reset gray
        0x005A_6F83, // neutral_hover - Lighter gray
        0x005A_6F83, // border - Slate border
        0x001A_2F1A, // output_bg - Dark green panel
        0x002D_4A2D, // output_border - Green border
        0x004A_DE80, // output_text - Terminal green
        0x00F8_7171, // output_error - Soft red
    )
}

/// Oxide - Warm neutral browns with earthy copper accents
pub fn oxide() -> AppTheme {
    AppTheme::from_hex(
        "Oxide",
        0x0023_1D1B, // bg_base - Neutral warm brown
        0x001D_1816, // bg_header - Deep oxide brown
        0x002E_2623, // bg_surface - Lighter card surface
        0x003A_312E, // bg_elevated - Input background
        0x0046_3B38, // bg_hover - Subtle highlight
        0x00E6_DBD3, // fg_primary - Warm parchment text
        0x00B8_ACA2, // fg_secondary - Muted clay text
        0x007A_6E67, // fg_muted - Darkened earth gray
        0x001D_1816, // fg_on_accent - Dark text on copper
        0x00A7_5533, // accent - Burnt copper orange
        0x00BD_6D4D, // accent_hover - Warm clay highlight
        0x008F_A172, // success - Muted sage green
        0x00A3_B386, // success_hover - Lighter sage
        0x0046_3B38, // neutral - Brown gray
        0x0052_4541, // neutral_hover - Active brown
        0x003E_3532, // border - Subtle brown border
        0x001D_1816, // output_bg - Deep brown panel
        0x003E_3532, // output_border - Brown border
        0x00DB_B98F, // output_text - Sandstone gold
        0x00C2_5D4E, // output_error - Terracotta red
    )
}

/// Oxide Light - Light counterpart to Oxide
/// Warm copper-tinted cream, readable in bright field offices
pub fn oxide_light() -> AppTheme {
    AppTheme::from_hex(
        "Oxide Light",
        0x00F2_E8D8, // bg_base - Warm cream with subtle copper tint
        0x00E3_D7C5, // bg_header - Warm clay banner
        0x00F7_F0E5, // bg_surface - Light warm cream cards
        0x00FC_F8F0, // bg_elevated - Almost white with warmth
        0x00DC_CFBD, // bg_hover - Warm tan hover
        0x003A_2E25, // fg_primary - Deep warm brown (almost black)
        0x006A_5D51, // fg_secondary - Medium warm brown
        0x009B_8D7F, // fg_muted - Light brown for labels
        0x00FF_FCF8, // fg_on_accent - Light cream on copper
        0x00A7_5533, // accent - Burnt copper (same as dark)
        0x0092_4A2E, // accent_hover - Darker copper for contrast
        0x006B_8456, // success - Sage green
        0x005A_7047, // success_hover - Darker sage
        0x00D4_C4B0, // neutral - Adobe tan
        0x00C8_B6A0, // neutral_hover - Darker tan
        0x00D8_CCBA, // border - Warm border
        0x00FC_F8F0, // output_bg - Near white panel
        0x00D8_CCBA, // output_border - Warm border
        0x003A_2E25, // output_text - Deep brown
        0x00AD_4433, // output_error - Warm terracotta
    )
}
