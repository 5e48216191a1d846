use crate::calendar::Month;
use crate::meta::{PageMeta, SITE_NAME};
use crate::models::SpecialDayRecord;
use crate::navigator::Cursor;

/// Which presentation the route serves. The home page shows today only; the
/// day page adds previous/next navigation and honors the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Today,
    Browse,
}

pub fn render_day(
    mode: PageMode,
    record: &SpecialDayRecord,
    cursor: Cursor,
    meta: &PageMeta,
) -> String {
    let hashtags: String = record
        .hashtags
        .iter()
        .map(|tag| format!(r#"<span class="hashtag">{}</span>"#, escape(tag)))
        .collect();

    let card = DAY_CARD_HTML
        .replace("{{DATE}}", &escape(&record.date))
        .replace("{{CATEGORY}}", &escape(&record.category))
        .replace("{{TITLE}}", &escape(&record.title))
        .replace("{{DESCRIPTION}}", &escape(&record.description))
        .replace("{{HASHTAGS}}", &hashtags)
        .replace("{{CONTROLS}}", &controls_for(mode, cursor, true));

    shell(meta, &record.title, &meta.description, &card)
}

pub fn render_not_found(mode: PageMode, cursor: Cursor, meta: &PageMeta) -> String {
    let card = NOT_FOUND_CARD_HTML
        .replace("{{MONTH}}", cursor.month().name())
        .replace("{{DAY}}", &cursor.day().to_string())
        // nothing resolved, nothing to share
        .replace("{{CONTROLS}}", &controls_for(mode, cursor, false));

    shell(meta, "No Special Day Found", &meta.description, &card)
}

fn controls_for(mode: PageMode, cursor: Cursor, with_share: bool) -> String {
    let share_button = if with_share {
        match mode {
            PageMode::Today => SHARE_BUTTON_SECONDARY,
            PageMode::Browse => SHARE_BUTTON_PRIMARY,
        }
    } else {
        ""
    };

    match mode {
        PageMode::Today => TODAY_CONTROLS_HTML.replace("{{SHARE_BUTTON}}", share_button),
        PageMode::Browse => BROWSE_CONTROLS_HTML
            .replace("{{DATE_PICKER}}", &date_picker(cursor))
            .replace(
                "{{PREV_URL}}",
                &format!("/day?{}", cursor.previous().query_string()),
            )
            .replace(
                "{{NEXT_URL}}",
                &format!("/day?{}", cursor.next().query_string()),
            )
            .replace("{{SHARE_BUTTON}}", share_button),
    }
}

/// Month and day selects seeded from the cursor. Submitting lands on `/day`,
/// where the clamping redirect canonicalizes a day too long for the chosen
/// month.
fn date_picker(cursor: Cursor) -> String {
    let month_options: String = Month::ALL
        .iter()
        .map(|month| {
            let selected = if *month == cursor.month() { " selected" } else { "" };
            format!(
                r#"<option value="{name}"{selected}>{name}</option>"#,
                name = month.name()
            )
        })
        .collect();

    let day_options: String = (1..=cursor.month().days())
        .map(|day| {
            let selected = if day == cursor.day() { " selected" } else { "" };
            format!(r#"<option value="{day}"{selected}>{day}</option>"#)
        })
        .collect();

    DATE_PICKER_HTML
        .replace("{{MONTH_OPTIONS}}", &month_options)
        .replace("{{DAY_OPTIONS}}", &day_options)
}

fn shell(meta: &PageMeta, share_title: &str, share_text: &str, card: &str) -> String {
    let structured_data = if meta.structured_data.is_empty() {
        String::new()
    } else {
        // keep "</script>" out of the inline JSON
        format!(
            r#"<script type="application/ld+json">{}</script>"#,
            meta.structured_data.replace('<', "\\u003c")
        )
    };

    PAGE_HTML
        .replace("{{PAGE_TITLE}}", &escape(&meta.title))
        .replace("{{META_DESCRIPTION}}", &escape(&meta.description))
        .replace("{{OG_TITLE}}", &escape(&meta.og_title))
        .replace("{{OG_DESCRIPTION}}", &escape(&meta.og_description))
        .replace("{{OG_URL}}", &escape(&meta.url))
        .replace("{{STRUCTURED_DATA}}", &structured_data)
        .replace("{{SHARE_TITLE}}", &js_escape(share_title))
        .replace("{{SHARE_TEXT}}", &js_escape(share_text))
        .replace("{{SITE_NAME}}", SITE_NAME)
        .replace("{{CARD}}", card)
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escapes a value for embedding in a single-quoted inline script string.
fn js_escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('<', "\\u003c")
}

const DAY_CARD_HTML: &str = r#"<div class="card">
      <div class="card-header">
        <div class="date-display">{{DATE}}</div>
        <span class="category-badge">{{CATEGORY}}</span>
      </div>
      <div class="card-body">
        <h1 class="special-day-title">{{TITLE}}</h1>
        <p class="special-day-description">{{DESCRIPTION}}</p>
        <div class="hashtags">{{HASHTAGS}}</div>
        {{CONTROLS}}
      </div>
    </div>"#;

const NOT_FOUND_CARD_HTML: &str = r#"<div class="card">
      <div class="card-body">
        <div class="error-state">
          <div class="emoji">&#128269;</div>
          <h2>No Special Day Found</h2>
          <p>We couldn't find a special day for {{MONTH}} {{DAY}}.</p>
        </div>
        {{CONTROLS}}
      </div>
    </div>"#;

const TODAY_CONTROLS_HTML: &str = r#"<div class="btn-group">
          <a href="/day" class="btn btn-primary">&#128197; View Any Date</a>
          {{SHARE_BUTTON}}
        </div>"#;

const BROWSE_CONTROLS_HTML: &str = r#"{{DATE_PICKER}}
        <div class="nav-buttons">
          <a href="{{PREV_URL}}" id="prev-day" class="nav-btn">&larr; Previous Day</a>
          <a href="{{NEXT_URL}}" id="next-day" class="nav-btn">Next Day &rarr;</a>
        </div>
        <div class="btn-group">
          <a href="/" class="btn btn-secondary">&#127968; Back to Today</a>
          {{SHARE_BUTTON}}
        </div>"#;

const DATE_PICKER_HTML: &str = r#"<form id="date-picker" class="date-picker" method="get" action="/day">
          <select id="month-select" name="month" aria-label="Month">{{MONTH_OPTIONS}}</select>
          <select id="day-select" name="day" aria-label="Day">{{DAY_OPTIONS}}</select>
          <button type="submit" class="btn btn-primary">Go</button>
        </form>"#;

const SHARE_BUTTON_PRIMARY: &str =
    r#"<button id="share-btn" class="btn btn-primary" type="button">&#128228; Share</button>"#;

const SHARE_BUTTON_SECONDARY: &str =
    r#"<button id="share-btn" class="btn btn-secondary" type="button">&#128228; Share</button>"#;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{PAGE_TITLE}}</title>
  <meta name="description" content="{{META_DESCRIPTION}}" />
  <meta property="og:title" content="{{OG_TITLE}}" />
  <meta property="og:description" content="{{OG_DESCRIPTION}}" />
  <meta property="og:url" content="{{OG_URL}}" />
  <meta property="og:type" content="website" />
  {{STRUCTURED_DATA}}
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .site {
      width: min(680px, 100%);
      display: grid;
      gap: 20px;
    }

    .site-title {
      margin: 0;
      text-align: center;
      font-size: clamp(1.6rem, 4vw, 2.4rem);
      color: var(--accent-2);
    }

    .card {
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      overflow: hidden;
    }

    .card-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 20px 28px;
      background: var(--accent-2);
      color: white;
    }

    .date-display {
      font-size: 1.1rem;
      font-weight: 600;
    }

    .category-badge {
      background: var(--accent);
      border-radius: 999px;
      padding: 4px 14px;
      font-size: 0.85rem;
    }

    .card-body {
      padding: 28px;
      display: grid;
      gap: 16px;
    }

    .special-day-title {
      margin: 0;
      font-size: clamp(1.4rem, 3.5vw, 2rem);
    }

    .special-day-description {
      margin: 0;
      line-height: 1.6;
      color: #4d4a45;
    }

    .hashtags {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .hashtag {
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      padding: 4px 12px;
      font-size: 0.85rem;
      color: var(--accent-2);
    }

    .date-picker {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .date-picker select {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.95rem;
      background: white;
      color: var(--accent-2);
    }

    .nav-buttons {
      display: flex;
      justify-content: space-between;
      gap: 12px;
    }

    .nav-btn,
    .btn {
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 0.95rem;
      font-weight: 600;
      text-decoration: none;
      cursor: pointer;
    }

    .nav-btn {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-group {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
    }

    .error-state {
      text-align: center;
      display: grid;
      gap: 8px;
    }

    .error-state .emoji {
      font-size: 2.4rem;
    }

    .toast {
      position: fixed;
      bottom: 24px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--accent-2);
      color: white;
      border-radius: 999px;
      padding: 10px 22px;
      opacity: 0;
      transition: opacity 200ms ease;
      pointer-events: none;
    }

    .toast.show {
      opacity: 1;
    }
  </style>
</head>
<body>
  <main class="site">
    <h1 class="site-title">{{SITE_NAME}}</h1>
    {{CARD}}
  </main>
  <div id="toast" class="toast"></div>

  <script>
    const shareBtn = document.getElementById('share-btn');
    const toast = document.getElementById('toast');
    let toastTimer = null;

    const showToast = (message) => {
      toast.textContent = message;
      toast.classList.add('show');
      clearTimeout(toastTimer);
      toastTimer = setTimeout(() => toast.classList.remove('show'), 3000);
    };

    // Share capability providers, attempted in order; each may fail
    // independently and hand off to the next.
    const shareProviders = [
      async (payload) => {
        if (!navigator.share) {
          throw new Error('share unsupported');
        }
        await navigator.share(payload);
        return null;
      },
      async (payload) => {
        await navigator.clipboard.writeText(payload.url);
        return 'Link copied to clipboard! \u{1F4CB}';
      },
    ];

    const shareDay = async () => {
      const payload = {
        title: '{{SHARE_TITLE}}',
        text: '{{SHARE_TEXT}}',
        url: window.location.href,
      };
      for (const provider of shareProviders) {
        try {
          const notice = await provider(payload);
          if (notice) {
            showToast(notice);
          }
          return;
        } catch (_err) {
          // fall through to the next provider
        }
      }
      showToast('Failed to share link');
    };

    if (shareBtn) {
      shareBtn.addEventListener('click', shareDay);
    }

    const DAYS_IN_MONTH = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    const picker = document.getElementById('date-picker');
    const monthSelect = document.getElementById('month-select');
    const daySelect = document.getElementById('day-select');

    if (picker) {
      monthSelect.addEventListener('change', () => {
        const daysCount = DAYS_IN_MONTH[monthSelect.selectedIndex];
        const currentDay = parseInt(daySelect.value, 10) || 1;
        daySelect.innerHTML = '';
        for (let day = 1; day <= daysCount; day += 1) {
          const option = document.createElement('option');
          option.value = day;
          option.textContent = day;
          daySelect.appendChild(option);
        }
        daySelect.value = Math.min(currentDay, daysCount);
        picker.submit();
      });
      daySelect.addEventListener('change', () => picker.submit());
    }
  </script>
</body>
</html>
"#;
