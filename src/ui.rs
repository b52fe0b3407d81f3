use crate::catalog;

pub fn render_index() -> String {
    let catalog_json =
        serde_json::to_string(catalog::categories()).unwrap_or_else(|_| "[]".to_string());
    INDEX_HTML.replace("{{CATALOG}}", &catalog_json)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Boring Me</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #f6f5fb;
      --ink: #27263b;
      --muted: #6f6d85;
      --primary: #6366f1;
      --secondary: #ec4899;
      --accent: #22c55e;
      --card: #ffffff;
      --shadow: 0 18px 48px rgba(39, 38, 59, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      font-family: inherit;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, opacity 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .hidden {
      display: none !important;
    }

    /* login */
    .login-wrap {
      min-height: 100vh;
      display: grid;
      place-items: center;
      background: linear-gradient(135deg, var(--primary), var(--secondary));
      padding: 24px;
    }

    .login-card {
      width: min(420px, 100%);
      background: rgba(255, 255, 255, 0.18);
      backdrop-filter: blur(14px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 40px 32px;
      color: white;
      text-align: center;
    }

    .login-card h1 {
      font-size: 3rem;
      margin: 0 0 6px;
    }

    .login-card p {
      margin: 0 0 28px;
      color: rgba(255, 255, 255, 0.85);
    }

    .login-card label {
      display: block;
      text-align: left;
      font-size: 0.9rem;
      font-weight: 600;
      margin-bottom: 8px;
    }

    .login-card input {
      width: 100%;
      padding: 12px 16px;
      border-radius: 12px;
      border: 2px solid transparent;
      background: rgba(255, 255, 255, 0.3);
      color: white;
      font-family: inherit;
      font-size: 1rem;
      margin-bottom: 22px;
      outline: none;
    }

    .login-card input::placeholder {
      color: rgba(255, 255, 255, 0.6);
    }

    .login-card input:focus {
      border-color: white;
    }

    .login-card button {
      width: 100%;
      padding: 13px;
      background: white;
      color: var(--primary);
    }

    /* header */
    header.site {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 16px 24px;
      background: var(--card);
      box-shadow: 0 2px 12px rgba(39, 38, 59, 0.08);
      position: sticky;
      top: 0;
      z-index: 10;
    }

    header.site .brand {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--primary);
    }

    nav {
      display: flex;
      gap: 6px;
      background: var(--bg);
      padding: 6px;
      border-radius: 999px;
    }

    nav button {
      padding: 8px 16px;
      background: transparent;
      color: var(--muted);
      font-size: 0.95rem;
    }

    nav button.active {
      background: var(--card);
      color: var(--primary);
      box-shadow: 0 6px 14px rgba(39, 38, 59, 0.12);
    }

    .who {
      display: flex;
      align-items: center;
      gap: 12px;
      font-size: 0.95rem;
    }

    .who .name {
      font-weight: 600;
    }

    .who button {
      padding: 8px 16px;
      background: var(--bg);
      color: var(--muted);
      font-size: 0.9rem;
    }

    main {
      max-width: 1100px;
      margin: 0 auto;
      padding: 32px 20px 64px;
    }

    .view-title {
      text-align: center;
      font-size: 2.2rem;
      margin: 0 0 6px;
    }

    .view-subtitle {
      text-align: center;
      color: var(--muted);
      margin: 0 0 32px;
    }

    /* dashboard */
    .category-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(230px, 1fr));
      gap: 20px;
    }

    .category-card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 22px;
      border-top: 6px solid var(--primary);
      cursor: pointer;
      transition: transform 150ms ease;
    }

    .category-card:hover {
      transform: translateY(-4px);
    }

    .category-card .icon {
      font-size: 2rem;
    }

    .category-card h3 {
      margin: 12px 0 6px;
      font-size: 1.2rem;
    }

    .category-card p {
      margin: 0 0 10px;
      color: var(--muted);
      font-size: 0.92rem;
    }

    .category-card .count {
      font-size: 0.8rem;
      font-weight: 600;
      color: var(--primary);
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    /* records */
    .records-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
      gap: 20px;
    }

    .record-card {
      background: var(--card);
      border-radius: 18px;
      overflow: hidden;
      box-shadow: var(--shadow);
    }

    .record-card img {
      width: 100%;
      height: 180px;
      object-fit: cover;
      display: block;
      background: var(--bg);
    }

    .record-card .body {
      padding: 14px 16px 16px;
    }

    .record-card h4 {
      margin: 0 0 6px;
      font-size: 1.05rem;
    }

    .record-card .tag {
      display: inline-block;
      font-size: 0.75rem;
      font-weight: 600;
      color: var(--primary);
      background: rgba(99, 102, 241, 0.1);
      border-radius: 999px;
      padding: 3px 10px;
      margin-bottom: 8px;
    }

    .record-card .when {
      color: var(--muted);
      font-size: 0.85rem;
    }

    /* leaderboard */
    .filter-tabs {
      display: flex;
      justify-content: center;
      gap: 8px;
      background: rgba(39, 38, 59, 0.06);
      padding: 8px;
      border-radius: 999px;
      width: fit-content;
      margin: 0 auto 28px;
    }

    .filter-tabs button {
      padding: 9px 18px;
      background: transparent;
      color: var(--muted);
      font-size: 0.92rem;
    }

    .filter-tabs button.active {
      background: var(--primary);
      color: white;
      box-shadow: 0 8px 16px rgba(99, 102, 241, 0.35);
    }

    .board {
      display: grid;
      gap: 12px;
      max-width: 720px;
      margin: 0 auto;
    }

    .board-row {
      display: flex;
      align-items: center;
      gap: 16px;
      background: var(--card);
      border: 2px solid transparent;
      border-radius: 16px;
      padding: 14px 18px;
      box-shadow: 0 4px 14px rgba(39, 38, 59, 0.08);
    }

    .board-row.me {
      border-color: var(--primary);
    }

    .board-row .medal {
      width: 40px;
      text-align: center;
      font-size: 1.4rem;
      font-weight: 700;
      color: var(--muted);
    }

    .board-row.gold .medal { color: #eab308; }
    .board-row.silver .medal { color: #9ca3af; }
    .board-row.bronze .medal { color: #ea580c; }

    .board-row .player {
      flex: 1;
    }

    .board-row .player .name {
      font-weight: 600;
      font-size: 1.05rem;
    }

    .board-row .player .you {
      font-size: 0.7rem;
      font-weight: 700;
      color: var(--primary);
      letter-spacing: 0.06em;
    }

    .board-row .score {
      font-size: 1.2rem;
      font-weight: 700;
    }

    .board-row .score span {
      font-size: 0.8rem;
      font-weight: 400;
      color: var(--muted);
    }

    .empty-state {
      text-align: center;
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 48px 24px;
      max-width: 640px;
      margin: 0 auto;
    }

    .empty-state h3 {
      margin: 0 0 8px;
      font-size: 1.4rem;
    }

    .empty-state p {
      margin: 0;
      color: var(--muted);
    }

    /* modal */
    .overlay {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.5);
      backdrop-filter: blur(4px);
      display: grid;
      place-items: center;
      padding: 20px;
      z-index: 50;
    }

    .modal {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      width: min(640px, 100%);
      max-height: 88vh;
      display: flex;
      flex-direction: column;
    }

    .modal-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 20px 24px;
      border-bottom: 1px solid rgba(39, 38, 59, 0.08);
    }

    .modal-head h2 {
      margin: 0;
      font-size: 1.5rem;
    }

    .modal-head button {
      background: transparent;
      font-size: 1.3rem;
      color: var(--muted);
      padding: 4px 10px;
    }

    .modal-body {
      padding: 20px 24px;
      overflow-y: auto;
      flex: 1;
      display: grid;
      gap: 12px;
    }

    .task-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 14px;
      background: var(--bg);
      border-radius: 14px;
      padding: 14px 16px;
    }

    .task-row h4 {
      margin: 0 0 4px;
      font-size: 1rem;
    }

    .task-row p {
      margin: 0;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .task-row button {
      flex-shrink: 0;
      background: var(--accent);
      color: white;
      padding: 7px 16px;
      font-size: 0.85rem;
    }

    .modal-foot {
      padding: 18px 24px;
      border-top: 1px solid rgba(39, 38, 59, 0.08);
    }

    .modal-foot button,
    .upload-panel .save {
      width: 100%;
      padding: 13px;
      background: var(--secondary);
      color: white;
    }

    .upload-panel {
      display: grid;
      gap: 16px;
      justify-items: center;
      text-align: center;
    }

    .upload-panel h3 {
      margin: 0;
    }

    .upload-panel .hint {
      margin: 0;
      color: var(--muted);
    }

    .upload-panel label {
      width: 100%;
      border: 2px dashed rgba(39, 38, 59, 0.2);
      border-radius: 14px;
      padding: 28px;
      cursor: pointer;
      color: var(--muted);
    }

    .upload-panel label:hover {
      border-color: var(--primary);
    }

    .upload-panel img {
      max-height: 200px;
      max-width: 100%;
      border-radius: 12px;
    }

    .upload-panel .save {
      background: var(--primary);
    }

    .celebrate {
      text-align: center;
      padding: 36px 12px;
    }

    .celebrate .big {
      font-size: 4rem;
    }

    .celebrate h3 {
      margin: 14px 0 6px;
      font-size: 1.5rem;
    }

    .celebrate p {
      margin: 0;
      color: var(--muted);
    }

    @media (max-width: 600px) {
      header.site {
        justify-content: center;
      }
    }
  </style>
</head>
<body>
  <div id="login-view" class="login-wrap hidden">
    <div class="login-card">
      <h1>Boring Me</h1>
      <p>Turn your downtime into fun time.</p>
      <form id="login-form">
        <label for="username">What should we call you?</label>
        <input id="username" type="text" placeholder="Enter your name" autocomplete="off" required />
        <button type="submit">Let's Go!</button>
      </form>
    </div>
  </div>

  <div id="app-view" class="hidden">
    <header class="site">
      <span class="brand">Boring Me</span>
      <nav>
        <button data-view="dashboard" class="active" type="button">Dashboard</button>
        <button data-view="records" type="button">My Records</button>
        <button data-view="leaderboard" type="button">Leaderboard</button>
      </nav>
      <div class="who">
        <span class="name" id="who-name"></span>
        <button id="logout-btn" type="button">Log out</button>
      </div>
    </header>

    <main>
      <section id="dashboard-section">
        <h2 class="view-title" id="dashboard-title">What should we do today?</h2>
        <p class="view-subtitle">Pick a category to find your next adventure.</p>
        <div class="category-grid" id="category-grid"></div>
      </section>

      <section id="records-section" class="hidden">
        <h2 class="view-title">My Records</h2>
        <p class="view-subtitle">Every boredom you have beaten, with proof.</p>
        <div id="records-content"></div>
      </section>

      <section id="leaderboard-section" class="hidden">
        <h2 class="view-title">Leaderboard</h2>
        <p class="view-subtitle">See who's conquering boredom the most!</p>
        <div class="filter-tabs" id="filter-tabs">
          <button data-filter="day" type="button">Today</button>
          <button data-filter="week" class="active" type="button">This Week</button>
          <button data-filter="month" type="button">This Month</button>
          <button data-filter="year" type="button">This Year</button>
        </div>
        <div id="leaderboard-content"></div>
      </section>
    </main>
  </div>

  <div id="modal-overlay" class="overlay hidden">
    <div class="modal" id="modal">
      <div class="modal-head">
        <h2 id="modal-title"></h2>
        <button id="modal-close" type="button" aria-label="Close">&times;</button>
      </div>
      <div class="modal-body" id="modal-body"></div>
      <div class="modal-foot hidden" id="modal-foot">
        <button id="generate-btn" type="button">Generate New Idea with AI</button>
      </div>
    </div>
  </div>

  <script>
    const CATALOG = {{CATALOG}};

    let user = null;
    let activeView = 'dashboard';
    let activeFilter = 'week';

    let modalCategory = null;
    let modalTasks = [];
    let selectedTask = null;
    let imageData = null;
    let saving = false;
    let completedFlash = false;

    const el = (id) => document.getElementById(id);
    const loginView = el('login-view');
    const appView = el('app-view');
    const overlay = el('modal-overlay');

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res;
    };

    const setUser = (next) => {
      user = next;
      loginView.classList.toggle('hidden', !!user);
      appView.classList.toggle('hidden', !user);
      if (user) {
        el('who-name').textContent = user.username;
        el('dashboard-title').textContent = `What should we do today, ${user.username}?`;
        showView('dashboard');
      }
    };

    const showView = (view) => {
      activeView = view;
      document.querySelectorAll('nav button').forEach((btn) => {
        btn.classList.toggle('active', btn.dataset.view === view);
      });
      el('dashboard-section').classList.toggle('hidden', view !== 'dashboard');
      el('records-section').classList.toggle('hidden', view !== 'records');
      el('leaderboard-section').classList.toggle('hidden', view !== 'leaderboard');
      if (view === 'records') {
        loadRecords().catch((err) => alert(err.message));
      } else if (view === 'leaderboard') {
        loadLeaderboard().catch((err) => alert(err.message));
      }
    };

    /* dashboard */
    const renderDashboard = () => {
      const grid = el('category-grid');
      grid.innerHTML = '';
      CATALOG.forEach((category) => {
        const card = document.createElement('div');
        card.className = 'category-card';
        card.style.borderTopColor = category.color;

        const icon = document.createElement('div');
        icon.className = 'icon';
        icon.textContent = category.icon;

        const title = document.createElement('h3');
        title.textContent = category.title;

        const desc = document.createElement('p');
        desc.textContent = category.description;

        const count = document.createElement('div');
        count.className = 'count';
        count.textContent = `${category.tasks.length} ideas`;

        card.append(icon, title, desc, count);
        card.addEventListener('click', () => openModal(category));
        grid.appendChild(card);
      });
    };

    /* modal */
    const openModal = (category) => {
      modalCategory = category;
      modalTasks = category.tasks.slice();
      selectedTask = null;
      imageData = null;
      saving = false;
      completedFlash = false;
      overlay.classList.remove('hidden');
      renderModal();
    };

    const closeModal = () => {
      overlay.classList.add('hidden');
      modalCategory = null;
      selectedTask = null;
      imageData = null;
      saving = false;
      completedFlash = false;
    };

    const renderModal = () => {
      if (!modalCategory) return;
      el('modal-title').textContent = modalCategory.title;
      const body = el('modal-body');
      body.innerHTML = '';
      el('modal-foot').classList.toggle('hidden', !!selectedTask);

      if (completedFlash) {
        body.appendChild(renderCelebration());
        return;
      }
      if (selectedTask) {
        body.appendChild(renderUploadPanel());
        return;
      }
      modalTasks.forEach((task) => body.appendChild(renderTaskRow(task)));
    };

    const renderTaskRow = (task) => {
      const row = document.createElement('div');
      row.className = 'task-row';

      const text = document.createElement('div');
      const title = document.createElement('h4');
      title.textContent = task.title;
      const desc = document.createElement('p');
      desc.textContent = task.description;
      text.append(title, desc);

      const done = document.createElement('button');
      done.type = 'button';
      done.textContent = 'Done!';
      done.addEventListener('click', () => {
        selectedTask = task;
        renderModal();
      });

      row.append(text, done);
      return row;
    };

    const renderUploadPanel = () => {
      const panel = document.createElement('div');
      panel.className = 'upload-panel';

      const heading = document.createElement('h3');
      heading.textContent = `You did it! "${selectedTask.title}"`;
      const hint = document.createElement('p');
      hint.className = 'hint';
      hint.textContent = 'Capture the moment! Upload a photo or screenshot of your completed task.';

      const label = document.createElement('label');
      if (imageData) {
        const preview = document.createElement('img');
        preview.src = imageData;
        preview.alt = 'Preview';
        label.appendChild(preview);
      } else {
        label.textContent = 'Click to choose a photo';
      }

      const input = document.createElement('input');
      input.type = 'file';
      input.accept = 'image/*';
      input.style.display = 'none';
      input.addEventListener('change', () => {
        const file = input.files && input.files[0];
        if (!file) return;
        const reader = new FileReader();
        reader.onload = () => {
          imageData = reader.result;
          renderModal();
        };
        reader.readAsDataURL(file);
      });
      label.appendChild(input);

      const save = document.createElement('button');
      save.type = 'button';
      save.className = 'save';
      save.textContent = saving ? 'Saving...' : 'Save to My Records';
      save.disabled = !imageData || saving;
      save.addEventListener('click', saveRecord);

      panel.append(heading, hint, label, save);
      return panel;
    };

    const renderCelebration = () => {
      const wrap = document.createElement('div');
      wrap.className = 'celebrate';
      const big = document.createElement('div');
      big.className = 'big';
      big.textContent = '🎉';
      const heading = document.createElement('h3');
      heading.textContent = 'Awesome Job!';
      const note = document.createElement('p');
      note.textContent = 'Your achievement has been saved to your records.';
      wrap.append(big, heading, note);
      return wrap;
    };

    const saveRecord = async () => {
      if (!selectedTask || !imageData || saving) return;
      saving = true;
      renderModal();
      try {
        await api('/api/records', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            taskId: selectedTask.id,
            categoryId: modalCategory.id,
            taskTitle: selectedTask.title,
            categoryTitle: modalCategory.title,
            imageUrl: imageData
          })
        });
        completedFlash = true;
        renderModal();
        setTimeout(closeModal, 2000);
      } catch (err) {
        alert('Could not save your record. Please try again.');
        saving = false;
        renderModal();
      }
    };

    const generateIdea = async () => {
      const btn = el('generate-btn');
      btn.disabled = true;
      btn.textContent = 'Thinking of an idea...';
      try {
        const res = await api('/api/suggest', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ categoryId: modalCategory.id })
        });
        const task = await res.json();
        modalTasks.unshift(task);
        renderModal();
      } catch (err) {
        alert(err.message);
      } finally {
        btn.disabled = false;
        btn.textContent = 'Generate New Idea with AI';
      }
    };

    /* records */
    const loadRecords = async () => {
      const res = await api('/api/records');
      const records = await res.json();
      const content = el('records-content');
      content.innerHTML = '';

      if (!records.length) {
        content.appendChild(emptyState(
          'Nothing here yet...',
          'Complete a task from the dashboard and your proof will show up here.'
        ));
        return;
      }

      const grid = document.createElement('div');
      grid.className = 'records-grid';
      records.forEach((record) => {
        const card = document.createElement('div');
        card.className = 'record-card';

        const photo = document.createElement('img');
        photo.src = record.imageUrl;
        photo.alt = record.taskTitle;

        const body = document.createElement('div');
        body.className = 'body';
        const tag = document.createElement('span');
        tag.className = 'tag';
        tag.textContent = record.categoryTitle;
        const title = document.createElement('h4');
        title.textContent = record.taskTitle;
        const when = document.createElement('div');
        when.className = 'when';
        const stamp = new Date(record.date);
        when.textContent = isNaN(stamp) ? record.date : stamp.toLocaleString();
        body.append(tag, title, when);

        card.append(photo, body);
        grid.appendChild(card);
      });
      content.appendChild(grid);
    };

    /* leaderboard */
    const loadLeaderboard = async () => {
      const res = await api(`/api/leaderboard?filter=${activeFilter}`);
      const entries = await res.json();
      const content = el('leaderboard-content');
      content.innerHTML = '';

      if (!entries.length) {
        content.appendChild(emptyState(
          "It's a bit quiet here...",
          'No tasks completed in this period. Be the first!'
        ));
        return;
      }

      const board = document.createElement('div');
      board.className = 'board';
      entries.forEach((entry, index) => {
        const row = document.createElement('div');
        row.className = 'board-row';
        if (index === 0) row.classList.add('gold');
        if (index === 1) row.classList.add('silver');
        if (index === 2) row.classList.add('bronze');
        if (user && entry.username === user.username) row.classList.add('me');

        const medal = document.createElement('div');
        medal.className = 'medal';
        medal.textContent = index < 3 ? '🏆' : `${index + 1}`;

        const player = document.createElement('div');
        player.className = 'player';
        const name = document.createElement('div');
        name.className = 'name';
        name.textContent = entry.username;
        player.appendChild(name);
        if (user && entry.username === user.username) {
          const you = document.createElement('div');
          you.className = 'you';
          you.textContent = 'THIS IS YOU';
          player.appendChild(you);
        }

        const score = document.createElement('div');
        score.className = 'score';
        score.textContent = `${entry.score} `;
        const unit = document.createElement('span');
        unit.textContent = 'tasks';
        score.appendChild(unit);

        row.append(medal, player, score);
        board.appendChild(row);
      });
      content.appendChild(board);
    };

    const emptyState = (title, note) => {
      const wrap = document.createElement('div');
      wrap.className = 'empty-state';
      const heading = document.createElement('h3');
      heading.textContent = title;
      const text = document.createElement('p');
      text.textContent = note;
      wrap.append(heading, text);
      return wrap;
    };

    /* wiring */
    el('login-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const username = el('username').value.trim();
      if (!username) return;
      api('/api/login', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ username })
      })
        .then((res) => res.json())
        .then(setUser)
        .catch((err) => alert(err.message));
    });

    el('logout-btn').addEventListener('click', () => {
      api('/api/logout', { method: 'POST' })
        .then(() => setUser(null))
        .catch((err) => alert(err.message));
    });

    document.querySelectorAll('nav button').forEach((btn) => {
      btn.addEventListener('click', () => showView(btn.dataset.view));
    });

    el('filter-tabs').querySelectorAll('button').forEach((btn) => {
      btn.addEventListener('click', () => {
        activeFilter = btn.dataset.filter;
        el('filter-tabs').querySelectorAll('button').forEach((other) => {
          other.classList.toggle('active', other === btn);
        });
        loadLeaderboard().catch((err) => alert(err.message));
      });
    });

    el('generate-btn').addEventListener('click', generateIdea);
    el('modal-close').addEventListener('click', closeModal);
    overlay.addEventListener('click', closeModal);
    el('modal').addEventListener('click', (event) => event.stopPropagation());

    renderDashboard();
    fetch('/api/session')
      .then((res) => res.json())
      .then((data) => setUser(data.user))
      .catch(() => setUser(null));
  </script>
</body>
</html>
"##;
