//! Page stylesheet, injected by the component as a `<style>` element.

pub const CSS: &str = r#"
  :root {
    --bg: #0d0d0d;
    --panel: #141414;
    --border: #2a2a2a;
    --accent: #e8ff47;
    --text: #f0f0f0;
    --muted: #555;
    --transition: 0.6s cubic-bezier(0.77, 0, 0.175, 1);
  }

  html, body {
    margin: 0;
    height: 100%;
    background: var(--bg);
    color: var(--text);
    font-family: "JetBrains Mono", monospace;
    overflow: hidden;
  }

  .input-mode {
    min-height: 100vh;
    display: flex; flex-direction: column;
    align-items: center; justify-content: center;
    gap: 24px;
  }

  .title { font-size: 20px; font-weight: 700; letter-spacing: 0.06em; margin: 0; }

  .field-row { display: flex; align-items: center; gap: 12px; }

  .digits {
    width: 4.5ch; padding: 10px 14px;
    font: inherit; font-size: 40px; letter-spacing: 0.2em; text-align: center;
    color: var(--text); background: var(--panel);
    border: 2px solid var(--border); outline: none;
  }
  .digits:focus { border-color: var(--accent); }
  .digits::placeholder { color: var(--muted); }

  .clear, .close {
    font: inherit; font-size: 18px; font-weight: 700;
    color: var(--bg); background: var(--accent);
    border: none; padding: 8px 14px; cursor: pointer;
  }
  .clear:active, .close:active { transform: scale(0.97); }

  .display-mode {
    position: fixed; inset: 0;
    display: flex; align-items: center; justify-content: center;
    cursor: pointer; user-select: none;
  }

  .close { position: absolute; top: 16px; right: 16px; z-index: 10; }

  .number-wrapper { transition: transform var(--transition); }

  .number {
    font-size: min(40vw, 40vh);
    font-weight: 800; line-height: 1;
    font-variant-numeric: tabular-nums;
  }
"#;
