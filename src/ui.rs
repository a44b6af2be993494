use crate::models::Task;
use chrono::{DateTime, Local, NaiveDate};

/// View model for one habit card on the dashboard.
pub struct HabitCard {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub streak: u32,
    pub done_today: bool,
}

pub fn render_dashboard(today: NaiveDate, habits: &[HabitCard], open_tasks: &[Task]) -> String {
    let habit_cards = if habits.is_empty() {
        "<p class=\"empty\">No habits yet. POST one to /api/habits to get started.</p>".to_string()
    } else {
        habits.iter().map(render_habit_card).collect::<Vec<_>>().join("\n")
    };

    let task_rows = if open_tasks.is_empty() {
        "<li class=\"empty\">Nothing open. Enjoy the slack.</li>".to_string()
    } else {
        open_tasks.iter().map(render_task_row).collect::<Vec<_>>().join("\n")
    };

    INDEX_HTML
        .replace("{{DATE}}", &today.to_string())
        .replace("{{HABIT_CARDS}}", &habit_cards)
        .replace("{{TASK_ROWS}}", &task_rows)
        .replace("{{OPEN_COUNT}}", &open_tasks.len().to_string())
}

fn render_habit_card(habit: &HabitCard) -> String {
    let day_word = if habit.streak == 1 { "day" } else { "days" };
    let button = if habit.done_today {
        "<span class=\"done\">done today</span>".to_string()
    } else {
        format!(
            "<button class=\"mark\" data-habit-id=\"{}\">mark done</button>",
            habit.id
        )
    };
    format!(
        "<div class=\"habit\">\n  <span class=\"swatch\" style=\"background:{}\"></span>\n  <span class=\"name\">{}</span>\n  <span class=\"streak\">{} {}</span>\n  {}\n</div>",
        escape(&habit.color),
        escape(&habit.name),
        habit.streak,
        day_word,
        button
    )
}

fn render_task_row(task: &Task) -> String {
    let due = match task
        .due_date
        .and_then(|ts| DateTime::from_timestamp_millis(ts.millis()))
    {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => "someday".to_string(),
    };
    format!(
        "<li><span class=\"title\">{}</span><span class=\"due\">{}</span></li>",
        escape(&task.title),
        due
    )
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Lifeboard</title>
  <style>
    :root {
      --bg-1: #f6f4ee;
      --bg-2: #dcead9;
      --ink: #25302a;
      --accent: #4f9d69;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 20px 48px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #eef4ea 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 36px 18px 48px;
    }

    .app {
      width: min(780px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 26px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5f6a63;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
      color: var(--accent-2);
    }

    .habit {
      display: flex;
      align-items: center;
      gap: 12px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 14px;
      padding: 12px 16px;
      margin-bottom: 10px;
    }

    .swatch {
      width: 14px;
      height: 14px;
      border-radius: 50%;
      flex: none;
    }

    .habit .name {
      flex: 1;
      font-weight: 600;
    }

    .habit .streak {
      color: var(--accent-2);
      font-variant-numeric: tabular-nums;
    }

    .habit .done {
      color: var(--accent);
      font-weight: 600;
    }

    button.mark {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-weight: 600;
      color: white;
      background: var(--accent);
      cursor: pointer;
    }

    button.mark:active {
      transform: scale(0.97);
    }

    ul.tasks {
      list-style: none;
      margin: 0;
      padding: 0;
    }

    ul.tasks li {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      padding: 10px 4px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    ul.tasks .due {
      color: #7a746d;
      font-variant-numeric: tabular-nums;
    }

    .empty {
      color: #7a746d;
      font-style: italic;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.95rem;
      color: #c63b2b;
    }
  </style>
</head>
<body data-date="{{DATE}}">
  <main class="app">
    <header>
      <h1>Lifeboard</h1>
      <p class="subtitle">{{DATE}} &middot; {{OPEN_COUNT}} open tasks</p>
    </header>

    <section>
      <h2>Habits</h2>
      {{HABIT_CARDS}}
    </section>

    <section>
      <h2>Tasks</h2>
      <ul class="tasks">
        {{TASK_ROWS}}
      </ul>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    // The server's calendar day, not the browser's: both sides must agree
    // on which row "today" is.
    const today = document.body.dataset.date;

    document.querySelectorAll('button.mark').forEach((button) => {
      button.addEventListener('click', async () => {
        try {
          const res = await fetch('/api/habit-logs', {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify({
              habit_id: Number(button.dataset.habitId),
              date: today,
              completed: true
            })
          });
          if (!res.ok) {
            throw new Error(await res.text() || 'Request failed');
          }
          location.reload();
        } catch (err) {
          statusEl.textContent = err.message;
        }
      });
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::Timestamp;

    #[test]
    fn escapes_user_supplied_names() {
        let card = HabitCard {
            id: 1,
            name: "<script>alert(1)</script>".to_string(),
            color: "#fff".to_string(),
            streak: 2,
            done_today: false,
        };
        let html = render_habit_card(&card);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn dashboard_shows_streak_and_open_count() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let cards = vec![HabitCard {
            id: 1,
            name: "Meditate".to_string(),
            color: "#4f9d69".to_string(),
            streak: 5,
            done_today: false,
        }];
        let tasks = vec![Task {
            id: 1,
            title: "file taxes".to_string(),
            notes: None,
            due_date: Some(Timestamp::new(1_704_499_200_000)),
            completed: false,
            created_at: Timestamp::new(0),
            subtasks: Vec::new(),
        }];

        let html = render_dashboard(today, &cards, &tasks);
        assert!(html.contains("5 days"));
        assert!(html.contains("1 open tasks"));
        assert!(html.contains("file taxes"));
        assert!(html.contains("mark done"));
    }
}
