// SPDX-License-Identifier: MIT
//! Shared visual theme for the App Store frames — Vantag design system v2.0.
//!
//! One CSS block used by every frame (background, headlines, phone mockup,
//! status bar, tab bar) plus the two reusable HTML snippets. Frame sizes are
//! baked into the stylesheet as literals; `styles_match_frame_constants`
//! keeps them in sync with [`FRAME_WIDTH`]/[`FRAME_HEIGHT`].

use crate::appstore::model::{FRAME_HEIGHT, FRAME_WIDTH};

/// Base stylesheet shared by all six frames.
///
/// The phone-container height is the frame height minus the 540 px headline
/// area above and 50 px margin below (2868 - 540 - 50 = 2278).
pub const COMMON_CSS: &str = r##"
* { margin: 0; padding: 0; box-sizing: border-box; }
html, body {
    width: 1320px; height: 2868px;
    overflow: hidden;
    font-family: -apple-system, BlinkMacSystemFont, 'SF Pro Display',
                 'SF Pro Text', system-ui, sans-serif;
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}
body {
    background: linear-gradient(175deg, #3D2E5C 0%, #2A1D47 30%, #1A1128 100%);
    position: relative;
    color: #F5F5F7;
}

/* ── Background effects ── */
.bg-glow {
    position: absolute;
    top: -300px; left: 50%;
    transform: translateX(-50%);
    width: 1000px; height: 1000px;
    border-radius: 50%;
    background: radial-gradient(circle,
        rgba(95,74,139,0.5) 0%,
        rgba(95,74,139,0.2) 40%,
        transparent 70%);
    pointer-events: none;
}
.bg-glow-bottom {
    position: absolute;
    bottom: -400px; left: 50%;
    transform: translateX(-50%);
    width: 1200px; height: 800px;
    border-radius: 50%;
    background: radial-gradient(circle,
        rgba(34,211,238,0.08) 0%,
        transparent 60%);
    pointer-events: none;
}

/* ── Headlines ── */
.headline-section {
    position: absolute;
    top: 130px; left: 0; right: 0;
    text-align: center;
    z-index: 5;
    padding: 0 60px;
}
.headline {
    font-size: 74px;
    font-weight: 800;
    color: #FEFACD;
    line-height: 1.12;
    letter-spacing: -1.5px;
    text-shadow: 0 2px 40px rgba(254,250,205,0.15);
}
.subtitle {
    font-size: 36px;
    font-weight: 400;
    color: rgba(245,245,247,0.55);
    margin-top: 22px;
    letter-spacing: -0.3px;
}

/* ── Phone Mockup ── */
.phone-container {
    position: absolute;
    top: 540px; left: 50%;
    transform: translateX(-50%);
    width: 1080px;
    height: 2278px;
    z-index: 3;
}
.phone-frame {
    width: 100%;  height: 100%;
    border-radius: 62px;
    border: 5px solid rgba(120,90,180,0.35);
    overflow: hidden;
    position: relative;
    background: #08060E;
    box-shadow:
        0 60px 120px rgba(0,0,0,0.6),
        0 0 0 1px rgba(255,255,255,0.04),
        0 0 160px rgba(95,74,139,0.12),
        inset 0 1px 0 rgba(255,255,255,0.06);
}
.notch {
    position: absolute;
    top: 16px; left: 50%;
    transform: translateX(-50%);
    width: 190px; height: 50px;
    border-radius: 25px;
    background: #000;
    z-index: 20;
    box-shadow: 0 0 0 2px rgba(30,20,40,0.8);
}
.screen {
    position: absolute;
    top: 0; left: 0; right: 0; bottom: 0;
    background: #0A0A0F;
    overflow: hidden;
}
.home-bar {
    position: absolute;
    bottom: 14px; left: 50%;
    transform: translateX(-50%);
    width: 180px; height: 7px;
    border-radius: 4px;
    background: rgba(245,245,247,0.25);
    z-index: 25;
}

/* ── Status bar ── */
.status-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 30px 0;
    height: 82px;
    font-size: 26px;
    font-weight: 600;
    color: #F5F5F7;
    position: relative;
    z-index: 15;
}
.status-icons {
    display: flex; gap: 8px; align-items: center;
    font-size: 22px;
}
.status-icons .signal { letter-spacing: -2px; font-size: 14px; }
.status-icons .battery {
    width: 40px; height: 18px;
    border: 2px solid rgba(245,245,247,0.8);
    border-radius: 4px;
    position: relative;
    display: inline-block;
}
.status-icons .battery::after {
    content: '';
    position: absolute;
    right: -5px; top: 4px;
    width: 3px; height: 8px;
    border-radius: 0 2px 2px 0;
    background: rgba(245,245,247,0.8);
}
.status-icons .battery-fill {
    position: absolute;
    top: 2px; left: 2px; bottom: 2px;
    width: 70%;
    background: #4ADE80;
    border-radius: 2px;
}

/* ── Tab bar ── */
.tab-bar {
    position: absolute;
    bottom: 0; left: 0; right: 0;
    height: 110px;
    background: linear-gradient(180deg,
        rgba(10,10,15,0.0) 0%,
        rgba(10,10,15,0.95) 30%,
        #0A0A0F 100%);
    display: flex;
    align-items: center;
    justify-content: space-around;
    padding: 0 16px 30px;
    z-index: 15;
}
.tab {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 4px;
    opacity: 0.45;
    font-size: 18px;
}
.tab.active { opacity: 1; }
.tab-icon { font-size: 28px; }
.tab-label { font-size: 17px; font-weight: 500; }
.tab-add {
    width: 64px; height: 64px;
    border-radius: 50%;
    background: linear-gradient(135deg, #5F4A8B, #7B62A8);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 36px;
    font-weight: 300;
    color: white;
    box-shadow: 0 4px 20px rgba(95,74,139,0.5);
    margin-top: -20px;
}
"##;

/// iOS status bar (time, signal, wifi, battery).
pub const STATUS_BAR: &str = r##"
<div class="status-bar">
    <span>16:10</span>
    <div class="status-icons">
        <span class="signal">●●●●</span>
        <svg width="24" height="20" viewBox="0 0 24 20" fill="none">
            <path d="M12 17.5l-8.5-8.5C5.5 6.5 8.5 5 12 5s6.5 1.5 8.5 4l-8.5 8.5z"
                  fill="rgba(245,245,247,0.85)"/>
        </svg>
        <span class="battery">
            <span class="battery-fill"></span>
        </span>
    </div>
</div>
"##;

/// Five-item tab bar (Home active, center "+" button).
pub const TAB_BAR: &str = r##"
<div class="tab-bar">
    <div class="tab active">
        <div class="tab-icon">🏠</div>
        <div class="tab-label">Ana Sayfa</div>
    </div>
    <div class="tab">
        <div class="tab-icon">📊</div>
        <div class="tab-label">Analiz</div>
    </div>
    <div class="tab-add">+</div>
    <div class="tab">
        <div class="tab-icon">⭐</div>
        <div class="tab-label">Hayaller</div>
    </div>
    <div class="tab">
        <div class="tab-icon">⚙️</div>
        <div class="tab-label">Ayarlar</div>
    </div>
</div>
"##;

/// Wrap frame body + frame-specific CSS into a complete HTML document.
pub fn html_page(body: &str, extra_css: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"tr\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width={FRAME_WIDTH}, height={FRAME_HEIGHT}\">\n\
         <style>\n{COMMON_CSS}\n{extra_css}\n</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"bg-glow\"></div>\n\
         <div class=\"bg-glow-bottom\"></div>\n\
         {body}\n\
         </body>\n\
         </html>"
    )
}

/// Wrap a screen's content in the phone mockup, under a headline section.
pub fn phone_page(headline_html: &str, screen_html: &str) -> String {
    format!(
        r##"
    <div class="headline-section">
        {headline_html}
    </div>
    <div class="phone-container">
        <div class="phone-frame">
            <div class="notch"></div>
            <div class="screen">{screen_html}</div>
            <div class="home-bar"></div>
        </div>
    </div>
    "##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_match_frame_constants() {
        assert!(COMMON_CSS.contains(&format!("width: {FRAME_WIDTH}px")));
        assert!(COMMON_CSS.contains(&format!("height: {FRAME_HEIGHT}px")));
        // phone-container: frame height minus headline area and bottom margin
        let phone_height = FRAME_HEIGHT - 540 - 50;
        assert!(COMMON_CSS.contains(&format!("height: {phone_height}px")));
    }

    #[test]
    fn html_page_is_a_complete_document() {
        let doc = html_page("<p>hi</p>", ".x { color: red; }");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.ends_with("</html>"));
        assert_eq!(doc.matches("<style>").count(), 1);
        assert_eq!(doc.matches("</style>").count(), 1);
        assert!(doc.contains("<p>hi</p>"));
        assert!(doc.contains(".x { color: red; }"));
    }

    #[test]
    fn tab_bar_has_five_items() {
        // four labeled tabs plus the center add button
        assert_eq!(TAB_BAR.matches("tab-label").count(), 4);
        assert_eq!(TAB_BAR.matches("tab-add").count(), 1);
        assert_eq!(TAB_BAR.matches("tab active").count(), 1);
    }
}
