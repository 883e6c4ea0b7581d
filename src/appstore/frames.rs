// SPDX-License-Identifier: MIT
//! The six App Store frames: hook, home, decisions, reports, badges, AI chat.
//!
//! Each builder returns a complete HTML document. Copy is Turkish, matching
//! the store listing. Content is hand-authored mockup markup — the numbers
//! shown are illustrative, not pulled from the app.

use crate::appstore::model::Frame;
use crate::appstore::theme::{html_page, phone_page, STATUS_BAR, TAB_BAR};

/// All frames, in output order.
pub const FRAMES: [Frame; 6] = [
    Frame { name: "appstore_1_hook", build: hook },
    Frame { name: "appstore_2_home", build: home },
    Frame { name: "appstore_3_decisions", build: decisions },
    Frame { name: "appstore_4_reports", build: reports },
    Frame { name: "appstore_5_badges", build: badges },
    Frame { name: "appstore_6_ai_chat", build: ai_chat },
];

// ─── Frame 1 — hook (no phone, centered text) ────────────────────────────────

fn hook() -> String {
    const CSS: &str = r##"
    .hook-wrap {
        position: absolute;
        top: 0; left: 0; right: 0; bottom: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        z-index: 5;
    }
    .hook-emoji {
        font-size: 160px;
        margin-bottom: 40px;
        filter: drop-shadow(0 8px 30px rgba(0,0,0,0.3));
    }
    .hook-main {
        text-align: center;
    }
    .hook-line {
        font-size: 96px;
        font-weight: 800;
        color: #FEFACD;
        letter-spacing: -2px;
        line-height: 1.15;
        text-shadow: 0 4px 50px rgba(254,250,205,0.2);
    }
    .hook-equals {
        font-size: 72px;
        font-weight: 300;
        color: rgba(254,250,205,0.45);
        margin: 20px 0;
        display: block;
    }
    .hook-tagline {
        font-size: 38px;
        font-weight: 400;
        color: rgba(245,245,247,0.45);
        margin-top: 50px;
        letter-spacing: -0.3px;
    }
    .logo-section {
        position: absolute;
        bottom: 120px; left: 0; right: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 12px;
        z-index: 5;
    }
    .logo-mark {
        width: 80px; height: 80px;
        border-radius: 20px;
        background: linear-gradient(135deg, #5F4A8B, #7B62A8);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 40px;
        font-weight: 800;
        color: #FEFACD;
        box-shadow: 0 8px 30px rgba(95,74,139,0.4);
    }
    .logo-name {
        font-size: 32px;
        font-weight: 700;
        color: rgba(245,245,247,0.5);
        letter-spacing: 4px;
        text-transform: lowercase;
    }
    "##;
    const BODY: &str = r##"
    <div class="hook-wrap">
        <div class="hook-emoji">☕</div>
        <div class="hook-main">
            <div class="hook-line">200₺ kahve</div>
            <span class="hook-equals">=</span>
            <div class="hook-line">⏱ 45 dk mesai</div>
        </div>
        <div class="hook-tagline">Gerçek maliyet bu.</div>
    </div>
    <div class="logo-section">
        <div class="logo-mark">V</div>
        <div class="logo-name">vantag</div>
    </div>
    "##;
    html_page(BODY, CSS)
}

// ─── Frame 2 — home screen ───────────────────────────────────────────────────

fn home() -> String {
    const CSS: &str = r##"
    .home-content { padding: 88px 28px 120px; }
    .greeting-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 8px;
    }
    .avatar {
        width: 56px; height: 56px;
        border-radius: 50%;
        background: linear-gradient(135deg, #3D2E5C, #5F4A8B);
        border: 2px solid rgba(255,255,255,0.1);
        display: flex; align-items: center; justify-content: center;
        font-size: 24px;
    }
    .streak-badge {
        background: rgba(239,68,68,0.15);
        border: 1px solid rgba(239,68,68,0.3);
        border-radius: 20px;
        padding: 8px 16px;
        font-size: 22px;
        font-weight: 600;
        color: #F87171;
    }
    .greeting-text {
        font-size: 26px;
        color: #8B8B9E;
        margin: 14px 0 4px;
    }
    .month-header {
        font-size: 44px;
        font-weight: 800;
        color: #F5F5F7;
        letter-spacing: -0.5px;
        margin-bottom: 24px;
    }
    /* Habit CTA */
    .habit-cta {
        background: linear-gradient(135deg, rgba(95,74,139,0.25), rgba(95,74,139,0.1));
        border: 1px solid rgba(95,74,139,0.35);
        border-radius: 20px;
        padding: 22px 26px;
        display: flex;
        align-items: center;
        gap: 16px;
        margin-bottom: 28px;
    }
    .habit-icon {
        width: 48px; height: 48px;
        border-radius: 14px;
        background: linear-gradient(135deg, #5F4A8B, #7B62A8);
        display: flex; align-items: center; justify-content: center;
        font-size: 26px;
    }
    .habit-text { flex: 1; }
    .habit-title {
        font-size: 24px; font-weight: 600;
        color: #F5F5F7;
    }
    .habit-sub {
        font-size: 20px; color: #8B8B9E;
        margin-top: 2px;
    }
    .habit-arrow { font-size: 28px; color: #8B8B9E; }
    /* Hero card */
    .hero-card {
        background: linear-gradient(145deg, rgba(95,74,139,0.35), rgba(60,45,92,0.2));
        border: 1px solid rgba(95,74,139,0.3);
        border-radius: 28px;
        padding: 28px;
        text-align: center;
        margin-bottom: 28px;
        position: relative;
        overflow: hidden;
    }
    .hero-card::before {
        content: '';
        position: absolute;
        top: -60px; left: 50%;
        transform: translateX(-50%);
        width: 300px; height: 300px;
        border-radius: 50%;
        background: radial-gradient(circle, rgba(95,74,139,0.25), transparent 70%);
    }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        background: rgba(255,255,255,0.06);
        border: 1px solid rgba(255,255,255,0.1);
        border-radius: 12px;
        padding: 8px 16px;
        font-size: 20px;
        font-weight: 600;
        color: #FEFACD;
        margin-bottom: 28px;
        position: relative;
    }
    .hero-ring {
        width: 120px; height: 120px;
        border-radius: 50%;
        border: 5px solid rgba(95,74,139,0.25);
        margin: 0 auto 24px;
        position: relative;
        display: flex; align-items: center; justify-content: center;
    }
    .hero-ring::after {
        content: '';
        position: absolute;
        top: -5px; left: -5px; right: -5px; bottom: -5px;
        border-radius: 50%;
        border: 5px solid transparent;
        border-top-color: #5F4A8B;
        border-right-color: #5F4A8B;
    }
    .hero-ring-icon { font-size: 40px; }
    .hero-numbers {
        display: flex;
        justify-content: center;
        gap: 60px;
        position: relative;
    }
    .hero-num-group { text-align: center; }
    .hero-num {
        font-size: 80px;
        font-weight: 800;
        color: #F5F5F7;
        line-height: 1;
    }
    .hero-label {
        font-size: 22px;
        font-weight: 600;
        color: #8B8B9E;
        letter-spacing: 2px;
        margin-top: 6px;
    }
    .hero-footer {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-top: 22px;
        font-size: 21px;
        color: #8B8B9E;
    }
    .hero-budget-tag {
        color: #FEFACD;
        font-weight: 600;
    }
    .budget-dots {
        display: flex;
        justify-content: center;
        gap: 8px;
        margin-top: 14px;
    }
    .budget-dot {
        width: 10px; height: 10px;
        border-radius: 50%;
        background: #4ADE80;
    }
    /* Expense list */
    .section-title {
        font-size: 28px;
        font-weight: 700;
        color: #F5F5F7;
        margin: 20px 0 18px;
    }
    .expense-item {
        display: flex;
        align-items: center;
        gap: 16px;
        padding: 20px;
        background: rgba(19,19,26,0.6);
        border: 1px solid rgba(255,255,255,0.04);
        border-radius: 18px;
        margin-bottom: 12px;
    }
    .expense-icon {
        width: 50px; height: 50px;
        border-radius: 14px;
        display: flex; align-items: center; justify-content: center;
        font-size: 22px;
    }
    .expense-info { flex: 1; }
    .expense-amount {
        font-size: 26px; font-weight: 700; color: #F5F5F7;
    }
    .expense-meta {
        font-size: 20px; color: #6B6B7E; margin-top: 3px;
    }
    .expense-right { text-align: right; }
    .expense-date {
        font-size: 20px; color: #6B6B7E;
    }
    .expense-check {
        width: 36px; height: 36px;
        border-radius: 50%;
        background: linear-gradient(135deg, #22D3EE, #06B6D4);
        display: flex; align-items: center; justify-content: center;
        font-size: 18px;
        margin-top: 6px;
    }
    "##;

    let expenses = [
        ("📄", "F87171", "248,113,113", "1.000 ₺", "Faturalar · 2.9 saat"),
        ("🚌", "4ECDC4", "78,205,196", "990 ₺", "Ulaşım · 2.9 saat"),
        ("🍕", "FF6B6B", "255,107,107", "550 ₺", "Yeme-İçme · 1.6 saat"),
    ];
    let expense_html: String = expenses
        .iter()
        .map(|(emoji, color, rgb, amount, meta)| {
            format!(
                r##"
        <div class="expense-item">
            <div class="expense-icon" style="background:rgba({rgb},0.12);border:1px solid rgba({rgb},0.25);">
                <span style="color:#{color};">{emoji}</span>
            </div>
            <div class="expense-info">
                <div class="expense-amount">{amount}</div>
                <div class="expense-meta">{meta}</div>
            </div>
            <div class="expense-right">
                <div class="expense-date">8 Şub 2026</div>
                <div class="expense-check">✓</div>
            </div>
        </div>
        "##
            )
        })
        .collect();

    let screen = format!(
        r##"
    {STATUS_BAR}
    <div class="home-content">
        <div class="greeting-row">
            <div class="avatar">👤</div>
            <div class="streak-badge">🔥 2 gün</div>
        </div>
        <div class="greeting-text">İyi günler 👋</div>
        <div class="month-header">Şubat 2026</div>

        <div class="habit-cta">
            <div class="habit-icon">⚡</div>
            <div class="habit-text">
                <div class="habit-title">Alışkanlığın kaç gününü alıyor?</div>
                <div class="habit-sub">Hesapla ve şok ol →</div>
            </div>
            <div class="habit-arrow">›</div>
        </div>

        <div class="hero-card">
            <div class="hero-badge">⏰ ÇALIŞMA KARŞILIĞI</div>
            <div class="hero-ring">
                <div class="hero-ring-icon">💫</div>
            </div>
            <div class="hero-numbers">
                <div class="hero-num-group">
                    <div class="hero-num">7</div>
                    <div class="hero-label">SAAT</div>
                </div>
                <div class="hero-num-group">
                    <div class="hero-num">1</div>
                    <div class="hero-label">GÜN</div>
                </div>
            </div>
            <div class="hero-footer">
                <span>Bütçe Kullanımı</span>
                <span class="hero-budget-tag">%4</span>
            </div>
            <div class="budget-dots"><div class="budget-dot"></div></div>
        </div>

        <div class="section-title">Son Harcamalar</div>
        {expense_html}
    </div>
    {TAB_BAR}
    "##
    );

    let headline = r##"<h1 class="headline">Her harcamayı<br>saatinle gör</h1>"##;
    html_page(&phone_page(headline, &screen), CSS)
}

// ─── Frame 3 — decision sheet ────────────────────────────────────────────────

fn decisions() -> String {
    const CSS: &str = r##"
    .decision-content {
        padding: 88px 28px 60px;
        display: flex;
        flex-direction: column;
        height: 100%;
    }
    .sheet-handle {
        width: 50px; height: 5px;
        border-radius: 3px;
        background: rgba(255,255,255,0.15);
        margin: 0 auto 24px;
    }
    .sheet-title {
        font-size: 30px;
        font-weight: 700;
        color: #F5F5F7;
        text-align: center;
        margin-bottom: 36px;
    }
    /* Result card */
    .result-card {
        background: linear-gradient(145deg, rgba(95,74,139,0.3), rgba(40,30,65,0.2));
        border: 1px solid rgba(95,74,139,0.3);
        border-radius: 28px;
        padding: 36px;
        text-align: center;
        margin-bottom: 32px;
    }
    .result-amount {
        font-size: 72px;
        font-weight: 800;
        color: #F5F5F7;
        letter-spacing: -1px;
    }
    .result-category {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        background: rgba(78,205,196,0.1);
        border: 1px solid rgba(78,205,196,0.2);
        border-radius: 12px;
        padding: 8px 18px;
        font-size: 22px;
        color: #4ECDC4;
        margin: 16px 0 28px;
    }
    .result-divider {
        width: 60px; height: 3px;
        background: rgba(95,74,139,0.4);
        border-radius: 2px;
        margin: 0 auto 28px;
    }
    .result-hours-label {
        font-size: 22px;
        color: #8B8B9E;
        margin-bottom: 8px;
        letter-spacing: 2px;
        font-weight: 600;
    }
    .result-hours {
        font-size: 80px;
        font-weight: 800;
        color: #FEFACD;
        line-height: 1;
    }
    .result-hours-unit {
        font-size: 30px;
        font-weight: 600;
        color: rgba(254,250,205,0.6);
        margin-top: 4px;
    }
    .result-ring {
        width: 160px; height: 160px;
        border-radius: 50%;
        border: 6px solid rgba(95,74,139,0.2);
        margin: 10px auto 20px;
        position: relative;
        display: flex; align-items: center; justify-content: center;
        flex-direction: column;
    }
    .result-ring::after {
        content: '';
        position: absolute;
        top: -6px; left: -6px; right: -6px; bottom: -6px;
        border-radius: 50%;
        border: 6px solid transparent;
        border-top-color: #FEFACD;
        border-right-color: #FEFACD;
        border-bottom-color: #FEFACD;
        transform: rotate(-30deg);
    }
    .result-insight {
        font-size: 22px;
        color: #8B8B9E;
        margin-top: 20px;
        font-style: italic;
        line-height: 1.4;
        padding: 0 10px;
    }
    /* Decision buttons */
    .decision-label {
        font-size: 26px;
        color: #8B8B9E;
        text-align: center;
        margin-bottom: 20px;
        font-weight: 500;
    }
    .decision-row {
        display: flex;
        gap: 14px;
    }
    .decision-btn {
        flex: 1;
        border-radius: 22px;
        padding: 28px 12px;
        text-align: center;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 12px;
    }
    .decision-btn .d-icon {
        width: 56px; height: 56px;
        border-radius: 16px;
        display: flex; align-items: center; justify-content: center;
        font-size: 26px;
    }
    .decision-btn .d-label {
        font-size: 24px;
        font-weight: 600;
    }
    .btn-yes {
        background: rgba(248,113,113,0.08);
        border: 1px solid rgba(248,113,113,0.2);
    }
    .btn-yes .d-icon {
        background: rgba(248,113,113,0.15);
        border: 1px solid rgba(248,113,113,0.3);
        color: #F87171;
    }
    .btn-yes .d-label { color: #F87171; }
    .btn-think {
        background: rgba(251,191,36,0.08);
        border: 1px solid rgba(251,191,36,0.2);
    }
    .btn-think .d-icon {
        background: rgba(251,191,36,0.15);
        border: 1px solid rgba(251,191,36,0.3);
        color: #FBBF24;
    }
    .btn-think .d-label { color: #FBBF24; }
    .btn-no {
        background: rgba(34,211,238,0.1);
        border: 1.5px solid rgba(34,211,238,0.35);
        box-shadow: 0 0 30px rgba(34,211,238,0.08);
    }
    .btn-no .d-icon {
        background: rgba(34,211,238,0.2);
        border: 1px solid rgba(34,211,238,0.4);
        color: #22D3EE;
    }
    .btn-no .d-label { color: #22D3EE; }
    "##;

    let screen = format!(
        r##"
    {STATUS_BAR}
    <div class="decision-content">
        <div class="sheet-handle"></div>
        <div class="sheet-title">Harcama Ekle</div>

        <div class="result-card">
            <div class="result-amount">990 ₺</div>
            <div class="result-category">🚌 Ulaşım</div>
            <div class="result-divider"></div>
            <div class="result-hours-label">⏰ ÇALIŞMA KARŞILIĞI</div>
            <div class="result-ring">
                <div class="result-hours">2.9</div>
                <div class="result-hours-unit">SAAT</div>
            </div>
            <div class="result-insight">"Bu harcama maaşının %2.9'una denk"</div>
        </div>

        <div class="decision-label">Kararını ver:</div>
        <div class="decision-row">
            <div class="decision-btn btn-yes">
                <div class="d-icon">✓</div>
                <div class="d-label">Aldım</div>
            </div>
            <div class="decision-btn btn-think">
                <div class="d-icon">⏳</div>
                <div class="d-label">Düşünüyorum</div>
            </div>
            <div class="decision-btn btn-no">
                <div class="d-icon">✕</div>
                <div class="d-label">Vazgeçtim</div>
            </div>
        </div>
    </div>
    "##
    );

    let headline = r##"<h1 class="headline">Aldım. Düşünüyorum.<br>Vazgeçtim.</h1>
        <p class="subtitle">Her harcamada bilinçli karar</p>"##;
    html_page(&phone_page(headline, &screen), CSS)
}

// ─── Frame 4 — reports ───────────────────────────────────────────────────────

fn reports() -> String {
    const CSS: &str = r##"
    .report-content { padding: 88px 24px 120px; }
    .report-header {
        font-size: 42px;
        font-weight: 800;
        color: #F5F5F7;
        margin-bottom: 20px;
    }
    .filter-row {
        display: flex; gap: 10px;
        margin-bottom: 28px;
    }
    .filter-chip {
        padding: 10px 22px;
        border-radius: 14px;
        font-size: 22px;
        font-weight: 600;
        background: rgba(255,255,255,0.04);
        border: 1px solid rgba(255,255,255,0.06);
        color: #6B6B7E;
    }
    .filter-chip.active {
        background: rgba(95,74,139,0.2);
        border-color: rgba(95,74,139,0.4);
        color: #FEFACD;
    }
    /* Stats grid */
    .stats-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 14px;
        margin-bottom: 28px;
    }
    .stat-card {
        background: rgba(19,19,26,0.6);
        border: 1px solid rgba(255,255,255,0.04);
        border-radius: 22px;
        padding: 22px;
    }
    .stat-icon-row {
        display: flex;
        align-items: center;
        gap: 10px;
        margin-bottom: 14px;
    }
    .stat-icon {
        width: 40px; height: 40px;
        border-radius: 12px;
        display: flex; align-items: center; justify-content: center;
        font-size: 20px;
    }
    .stat-title {
        font-size: 20px;
        color: #8B8B9E;
        font-weight: 500;
    }
    .stat-value {
        font-size: 38px;
        font-weight: 800;
        color: #F5F5F7;
        margin-bottom: 4px;
    }
    .stat-sub {
        font-size: 19px;
        color: #6B6B7E;
    }
    /* Pie chart */
    .chart-section {
        background: rgba(19,19,26,0.6);
        border: 1px solid rgba(255,255,255,0.04);
        border-radius: 22px;
        padding: 24px;
        margin-bottom: 20px;
    }
    .chart-title {
        font-size: 24px;
        font-weight: 700;
        color: #F5F5F7;
        margin-bottom: 20px;
    }
    .pie-wrapper {
        display: flex;
        align-items: center;
        gap: 30px;
    }
    .pie-chart {
        width: 180px; height: 180px;
        border-radius: 50%;
        background: conic-gradient(
            #FF6B6B 0deg 120deg,
            #4ECDC4 120deg 210deg,
            #9B59B6 210deg 275deg,
            #3498DB 275deg 320deg,
            #6B6B7E 320deg 360deg
        );
        position: relative;
        flex-shrink: 0;
    }
    .pie-hole {
        position: absolute;
        top: 35px; left: 35px; right: 35px; bottom: 35px;
        border-radius: 50%;
        background: rgba(19,19,26,0.95);
        display: flex;
        align-items: center;
        justify-content: center;
        flex-direction: column;
    }
    .pie-total { font-size: 28px; font-weight: 800; color: #F5F5F7; }
    .pie-total-label { font-size: 16px; color: #6B6B7E; }
    .pie-legend { flex: 1; }
    .legend-item {
        display: flex; align-items: center; gap: 10px;
        margin-bottom: 12px;
        font-size: 20px;
        color: #8B8B9E;
    }
    .legend-dot {
        width: 14px; height: 14px;
        border-radius: 4px;
        flex-shrink: 0;
    }
    .legend-value {
        margin-left: auto;
        font-weight: 600;
        color: #F5F5F7;
    }
    "##;

    let legend = [
        ("FF6B6B", "Yeme-İçme", "2.100 ₺"),
        ("4ECDC4", "Ulaşım", "1.500 ₺"),
        ("9B59B6", "Giyim", "890 ₺"),
        ("3498DB", "Eğlence", "450 ₺"),
        ("6B6B7E", "Diğer", "300 ₺"),
    ];
    let legend_html: String = legend
        .iter()
        .map(|(color, label, value)| {
            format!(
                r##"
                    <div class="legend-item">
                        <div class="legend-dot" style="background:#{color};"></div>
                        {label}
                        <span class="legend-value">{value}</span>
                    </div>
                "##
            )
        })
        .collect();

    let screen = format!(
        r##"
    {STATUS_BAR}
    <div class="report-content">
        <div class="report-header">Analiz</div>
        <div class="filter-row">
            <div class="filter-chip">Bu Hafta</div>
            <div class="filter-chip active">Bu Ay</div>
            <div class="filter-chip">Tümü</div>
        </div>

        <div class="stats-grid">
            <div class="stat-card">
                <div class="stat-icon-row">
                    <div class="stat-icon" style="background:rgba(248,113,113,0.12);"><span style="color:#F87171;">🛒</span></div>
                    <div class="stat-title">Toplam Harcama</div>
                </div>
                <div class="stat-value">5.240 ₺</div>
                <div class="stat-sub">15.3 saat karşılığı</div>
            </div>
            <div class="stat-card">
                <div class="stat-icon-row">
                    <div class="stat-icon" style="background:rgba(34,211,238,0.12);"><span style="color:#22D3EE;">🛡️</span></div>
                    <div class="stat-title">Toplam Tasarruf</div>
                </div>
                <div class="stat-value" style="color:#22D3EE;">2.100 ₺</div>
                <div class="stat-sub">6.1 saat kurtarıldı</div>
            </div>
            <div class="stat-card">
                <div class="stat-icon-row">
                    <div class="stat-icon" style="background:rgba(59,130,246,0.12);"><span style="color:#3B82F6;">📋</span></div>
                    <div class="stat-title">Harcama Sayısı</div>
                </div>
                <div class="stat-value">24</div>
                <div class="stat-sub">12 aldım · 12 vazgeçtim</div>
            </div>
            <div class="stat-card">
                <div class="stat-icon-row">
                    <div class="stat-icon" style="background:rgba(74,222,128,0.12);"><span style="color:#4ADE80;">📈</span></div>
                    <div class="stat-title">Vazgeçme Oranı</div>
                </div>
                <div class="stat-value" style="color:#4ADE80;">%38</div>
                <div class="stat-sub">Daha iyi olabilir</div>
            </div>
        </div>

        <div class="chart-section">
            <div class="chart-title">Kategori Dağılımı</div>
            <div class="pie-wrapper">
                <div class="pie-chart">
                    <div class="pie-hole">
                        <div class="pie-total">5.2K</div>
                        <div class="pie-total-label">Toplam</div>
                    </div>
                </div>
                <div class="pie-legend">
                    {legend_html}
                </div>
            </div>
        </div>
    </div>
    {TAB_BAR}
    "##
    );

    let headline = r##"<h1 class="headline">Paran nereye gidiyor?</h1>
        <p class="subtitle">Detaylı analiz ve raporlar</p>"##;
    html_page(&phone_page(headline, &screen), CSS)
}

// ─── Frame 5 — badges ────────────────────────────────────────────────────────

fn badges() -> String {
    const CSS: &str = r##"
    .badge-content { padding: 88px 24px 120px; }
    .badge-header {
        font-size: 42px;
        font-weight: 800;
        color: #F5F5F7;
        margin-bottom: 6px;
    }
    .badge-count {
        font-size: 24px;
        color: #8B8B9E;
        margin-bottom: 28px;
    }
    .badge-count span {
        color: #FEFACD;
        font-weight: 700;
    }
    .badge-grid {
        display: grid;
        grid-template-columns: 1fr 1fr 1fr;
        gap: 14px;
    }
    .badge-card {
        background: rgba(19,19,26,0.6);
        border: 1px solid rgba(255,255,255,0.04);
        border-radius: 20px;
        padding: 22px 14px;
        text-align: center;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 10px;
    }
    .badge-card.earned {
        border-color: rgba(95,74,139,0.4);
        background: rgba(95,74,139,0.1);
        box-shadow: 0 0 25px rgba(95,74,139,0.1);
    }
    .badge-card.locked {
        opacity: 0.4;
        border-style: dashed;
    }
    .badge-emoji {
        font-size: 48px;
        filter: drop-shadow(0 2px 8px rgba(0,0,0,0.3));
    }
    .badge-card.locked .badge-emoji {
        filter: grayscale(0.7) drop-shadow(0 2px 8px rgba(0,0,0,0.3));
    }
    .badge-name {
        font-size: 19px;
        font-weight: 600;
        color: #F5F5F7;
        line-height: 1.2;
    }
    .badge-card.locked .badge-name {
        color: #6B6B7E;
    }
    .badge-level {
        font-size: 16px;
        color: #8B8B9E;
    }
    .badge-card.earned .badge-level {
        color: #FEFACD;
    }
    "##;

    let entries: [(&str, &str, bool); 12] = [
        ("🚀", "İlk Adım", true),
        ("🔥", "3 Gün Seri", true),
        ("💰", "1K Tasarruf", true),
        ("🎯", "Hedef Koyucu", true),
        ("📊", "Analist", true),
        ("🛡️", "Koruyucu", true),
        ("⚡", "Hızlı Karar", true),
        ("🌟", "Parlayan Yıldız", true),
        ("🎖️", "Disiplinli", true),
        ("👑", "Kral", false),
        ("💎", "Elmas", false),
        ("🏅", "Altın Çağ", false),
    ];
    let grid_html: String = entries
        .iter()
        .map(|(emoji, name, earned)| {
            let (class, level) = if *earned {
                ("earned", "Kazanıldı")
            } else {
                ("locked", "Kilitli")
            };
            format!(
                r##"
        <div class="badge-card {class}">
            <div class="badge-emoji">{emoji}</div>
            <div class="badge-name">{name}</div>
            <div class="badge-level">{level}</div>
        </div>
        "##
            )
        })
        .collect();

    let screen = format!(
        r##"
    {STATUS_BAR}
    <div class="badge-content">
        <div class="badge-header">Rozetler</div>
        <div class="badge-count"><span>12</span> / 57 kazanıldı</div>
        <div class="badge-grid">
            {grid_html}
        </div>
    </div>
    {TAB_BAR}
    "##
    );

    let headline = r##"<h1 class="headline">57 rozet.<br>Gerçek ödüller.</h1>
        <p class="subtitle">Finansal disiplini oyunlaştır</p>"##;
    html_page(&phone_page(headline, &screen), CSS)
}

// ─── Frame 6 — AI chat ───────────────────────────────────────────────────────

fn ai_chat() -> String {
    const CSS: &str = r##"
    .chat-content {
        padding: 88px 24px 30px;
        display: flex;
        flex-direction: column;
        height: 100%;
    }
    .chat-header {
        text-align: center;
        margin-bottom: 28px;
    }
    .chat-header-title {
        font-size: 34px;
        font-weight: 700;
        color: #F5F5F7;
    }
    .chat-header-sub {
        font-size: 20px;
        color: #8B8B9E;
        margin-top: 4px;
    }
    .chat-ai-avatar {
        width: 70px; height: 70px;
        border-radius: 50%;
        background: linear-gradient(135deg, #5F4A8B, #7B62A8);
        display: flex; align-items: center; justify-content: center;
        font-size: 34px;
        margin: 0 auto 20px;
        box-shadow: 0 4px 20px rgba(95,74,139,0.4);
    }
    .chat-messages {
        flex: 1;
        display: flex;
        flex-direction: column;
        gap: 18px;
        overflow: hidden;
    }
    .msg {
        max-width: 85%;
        border-radius: 22px;
        padding: 20px 24px;
        font-size: 24px;
        line-height: 1.45;
    }
    .msg-user {
        align-self: flex-end;
        background: linear-gradient(135deg, #5F4A8B, #4A3870);
        color: #F5F5F7;
        border-bottom-right-radius: 6px;
    }
    .msg-ai {
        align-self: flex-start;
        background: rgba(19,19,26,0.8);
        border: 1px solid rgba(255,255,255,0.06);
        color: #F5F5F7;
        border-bottom-left-radius: 6px;
    }
    .msg-ai .highlight {
        color: #FEFACD;
        font-weight: 600;
    }
    .msg-ai .stat-line {
        display: block;
        padding: 3px 0;
    }
    .chat-input-bar {
        display: flex;
        align-items: center;
        gap: 12px;
        padding: 16px 20px;
        background: rgba(19,19,26,0.6);
        border: 1px solid rgba(255,255,255,0.06);
        border-radius: 20px;
        margin-top: 18px;
        margin-bottom: 48px;
    }
    .chat-input-text {
        flex: 1;
        font-size: 22px;
        color: #6B6B7E;
    }
    .chat-input-mic {
        width: 44px; height: 44px;
        border-radius: 50%;
        background: linear-gradient(135deg, #5F4A8B, #7B62A8);
        display: flex; align-items: center; justify-content: center;
        font-size: 22px;
    }
    "##;

    let screen = format!(
        r##"
    {STATUS_BAR}
    <div class="chat-content">
        <div class="chat-header">
            <div class="chat-ai-avatar">✨</div>
            <div class="chat-header-title">AI Asistan</div>
            <div class="chat-header-sub">Vantag Finansal Asistan</div>
        </div>

        <div class="chat-messages">
            <div class="msg msg-user">Bu ay ne kadar harcadım?</div>

            <div class="msg msg-ai">
                Şubat ayında toplam <span class="highlight">5.240₺</span> harcadınız.
                <br><br>
                📊 En yüksek kategoriler:
                <span class="stat-line">1. Yeme-İçme: <span class="highlight">2.100₺</span></span>
                <span class="stat-line">2. Ulaşım: <span class="highlight">1.500₺</span></span>
                <span class="stat-line">3. Faturalar: <span class="highlight">890₺</span></span>
                <br>
                Geçen aya göre <span class="highlight">%12 azalma</span> var! 🎉
            </div>

            <div class="msg msg-user">Tasarruf için ne önerirsin?</div>

            <div class="msg msg-ai">
                Yeme-İçme kategorisinde haftada 3 kez dışarıda yemek yerine
                evde hazırlayarak ayda yaklaşık
                <span class="highlight">800₺ tasarruf</span> edebilirsiniz! 💡
                <br><br>
                Bu, <span class="highlight">2.3 saat</span> daha az çalışmak demek ⏰
            </div>
        </div>

        <div class="chat-input-bar">
            <div class="chat-input-text">Harcamalarını sor...</div>
            <div class="chat-input-mic">🎤</div>
        </div>
    </div>
    "##
    );

    let headline = r##"<h1 class="headline">Yapay zekaya<br>harcamalarını sor</h1>
        <p class="subtitle">Kişisel finans asistanın</p>"##;
    html_page(&phone_page(headline, &screen), CSS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_six_frames_in_order() {
        let names: Vec<&str> = FRAMES.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "appstore_1_hook",
                "appstore_2_home",
                "appstore_3_decisions",
                "appstore_4_reports",
                "appstore_5_badges",
                "appstore_6_ai_chat",
            ]
        );
    }

    #[test]
    fn every_frame_is_a_well_formed_document() {
        for frame in FRAMES {
            let doc = (frame.build)();
            assert!(doc.starts_with("<!DOCTYPE html>"), "{}", frame.name);
            assert!(doc.ends_with("</html>"), "{}", frame.name);
            assert_eq!(doc.matches("<html").count(), 1, "{}", frame.name);
            assert_eq!(doc.matches("<body>").count(), 1, "{}", frame.name);
            assert_eq!(doc.matches("</body>").count(), 1, "{}", frame.name);
            assert_eq!(doc.matches("<style>").count(), 1, "{}", frame.name);
        }
    }

    #[test]
    fn phone_frames_carry_the_mockup_and_status_bar() {
        // All frames except the hook show the phone mockup with a status bar.
        for frame in &FRAMES[1..] {
            let doc = (frame.build)();
            for class in ["phone-frame", "notch", "screen", "home-bar", "status-bar"] {
                assert!(doc.contains(class), "{} missing .{class}", frame.name);
            }
        }
        let hook_doc = (FRAMES[0].build)();
        assert!(!hook_doc.contains("phone-frame"));
        assert!(hook_doc.contains("hook-wrap"));
    }

    #[test]
    fn frame_specific_classes_are_styled_in_their_own_document() {
        // Spot-check: each frame's signature class appears both in its CSS
        // and in its markup.
        let checks = [
            ("appstore_1_hook", "hook-line"),
            ("appstore_2_home", "hero-card"),
            ("appstore_3_decisions", "decision-btn"),
            ("appstore_4_reports", "pie-chart"),
            ("appstore_5_badges", "badge-grid"),
            ("appstore_6_ai_chat", "chat-messages"),
        ];
        for (name, class) in checks {
            let frame = FRAMES.iter().find(|f| f.name == name).unwrap();
            let doc = (frame.build)();
            assert!(
                doc.matches(class).count() >= 2,
                "{name}: .{class} not defined and used"
            );
        }
    }

    #[test]
    fn badge_grid_has_twelve_cards() {
        let doc = badges();
        assert_eq!(doc.matches("badge-card earned").count(), 9);
        assert_eq!(doc.matches("badge-card locked").count(), 3);
    }
}
