//! One CRUD module: the `core/` ports (use cases, entity, repository
//! contract) and the Nest wiring under `modules/<lower>/`.
//!
//! Every cross-file reference is spelled from the same bundle field that
//! names the target file: paths use `lower`, classes use `pascal`.

use stencil_core::domain::{NameBundle, RenderContext};

// ── core/ ───────────────────────────────────────────────────────────────────

pub fn entity(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    format!(
        r#"import {{ BaseEntity }} from 'libs/utils/entity';
import {{ z }} from 'zod';

const ID = z.string().uuid();
const Name = z.string().trim().min(1).max(200);
const Breed = z.string().trim().min(1).max(200);
const Age = z.number().min(0).max(1000);
const CreatedAt = z.date().nullish();
const UpdatedAt = z.date().nullish();
const DeletedAt = z.date().nullish();

export const {pascal}EntitySchema = z.object({{
  id: ID,
  name: Name,
  breed: Breed,
  age: Age,
  createdAt: CreatedAt,
  updatedAt: UpdatedAt,
  deletedAt: DeletedAt
}});

type {pascal} = z.infer<typeof {pascal}EntitySchema>;

export class {pascal}Entity extends BaseEntity<{pascal}Entity>() {{
  name: string;

  breed: string;

  age: number;

  constructor(entity: {pascal}) {{
    super({pascal}EntitySchema);
    Object.assign(this, this.validate(entity));
  }}
}}
"#
    )
}

pub fn repository_port(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ IRepository }} from 'libs/infra/repository';
import {{ DatabaseOptionsType }} from 'libs/utils/database/sequelize';

import {{ {pascal}Entity }} from '../entity/{lower}';
import {{ {pascal}ListInput, {pascal}ListOutput }} from '../use-cases/{lower}-list';

export abstract class I{pascal}Repository extends IRepository<{pascal}Entity> {{
  abstract paginate(input: {pascal}ListInput, options?: DatabaseOptionsType): Promise<{pascal}ListOutput>;
}}
"#
    )
}

pub fn create_usecase(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ ValidateSchema }} from 'libs/utils/decorators/validate-schema.decorator';
import {{ ApiTrancingInput }} from 'libs/utils/request';
import {{ z }} from 'zod';

import {{ {pascal}Entity, {pascal}EntitySchema }} from '../entity/{lower}';
import {{ I{pascal}Repository }} from '../repository/{lower}';

export const {pascal}CreateSchema = {pascal}EntitySchema.pick({{
  name: true,
  breed: true,
  age: true
}});

export type {pascal}CreateInput = z.infer<typeof {pascal}CreateSchema>;
export type {pascal}CreateOutput = {pascal}Entity;

export class {pascal}CreateUsecase {{
  constructor(private readonly {lower}Repository: I{pascal}Repository) {{}}

  @ValidateSchema({pascal}CreateSchema)
  async execute(input: {pascal}CreateInput, {{ tracing, user }}: ApiTrancingInput): Promise<{pascal}CreateOutput> {{
    const entity = new {pascal}Entity(input);

    const created = await this.{lower}Repository.create(entity);

    tracing.logEvent('{lower}-created', `{lower} created by: ${{user.login}}`);

    return created;
  }}
}}
"#
    )
}

pub fn update_usecase(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ ILoggerAdapter }} from 'libs/infra/logger';
import {{ ValidateSchema }} from 'libs/utils/decorators/validate-schema.decorator';
import {{ ApiNotFoundException }} from 'libs/utils/exception';
import {{ ApiTrancingInput }} from 'libs/utils/request';
import {{ z }} from 'zod';

import {{ {pascal}Entity, {pascal}EntitySchema }} from '../entity/{lower}';
import {{ I{pascal}Repository }} from '../repository/{lower}';

export const {pascal}UpdateSchema = {pascal}EntitySchema.pick({{
  id: true
}}).merge({pascal}EntitySchema.omit({{ id: true }}).partial());

export type {pascal}UpdateInput = z.infer<typeof {pascal}UpdateSchema>;
export type {pascal}UpdateOutput = {pascal}Entity;

export class {pascal}UpdateUsecase {{
  constructor(
    private readonly {lower}Repository: I{pascal}Repository,
    private readonly loggerService: ILoggerAdapter
  ) {{}}

  @ValidateSchema({pascal}UpdateSchema)
  async execute(input: {pascal}UpdateInput, {{ tracing, user }}: ApiTrancingInput): Promise<{pascal}UpdateOutput> {{
    const {lower} = await this.{lower}Repository.findById(input.id);

    if (!{lower}) {{
      throw new ApiNotFoundException('{lower}NotFound');
    }}

    const entity = new {pascal}Entity({{ ...{lower}, ...input }});

    await this.{lower}Repository.updateOne({{ id: entity.id }}, entity);

    this.loggerService.info({{ message: '{lower} updated.', obj: {{ {lower}: input }} }});

    const updated = await this.{lower}Repository.findById(entity.id);

    tracing.logEvent('{lower}-updated', `{lower} updated by: ${{user.login}}`);

    return new {pascal}Entity(updated);
  }}
}}
"#
    )
}

pub fn get_by_id_usecase(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ ValidateSchema }} from 'libs/utils/decorators/validate-schema.decorator';
import {{ ApiNotFoundException }} from 'libs/utils/exception';
import {{ z }} from 'zod';

import {{ {pascal}Entity, {pascal}EntitySchema }} from '../entity/{lower}';
import {{ I{pascal}Repository }} from '../repository/{lower}';

export const {pascal}GetByIdSchema = {pascal}EntitySchema.pick({{
  id: true
}});

export type {pascal}GetByIDInput = z.infer<typeof {pascal}GetByIdSchema>;
export type {pascal}GetByIDOutput = {pascal}Entity;

export class {pascal}GetByIdUsecase {{
  constructor(private readonly {lower}Repository: I{pascal}Repository) {{}}

  @ValidateSchema({pascal}GetByIdSchema)
  async execute({{ id }}: {pascal}GetByIDInput): Promise<{pascal}GetByIDOutput> {{
    const {lower} = await this.{lower}Repository.findById(id);

    if (!{lower}) {{
      throw new ApiNotFoundException('{lower}NotFound');
    }}

    return new {pascal}Entity({lower});
  }}
}}
"#
    )
}

pub fn list_usecase(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ ValidateSchema }} from 'libs/utils/decorators/validate-schema.decorator';
import {{ PaginationInput, PaginationOutput, PaginationSchema }} from 'libs/utils/pagination';
import {{ SearchSchema }} from 'libs/utils/search';
import {{ SortSchema }} from 'libs/utils/sort';
import {{ z }} from 'zod';

import {{ {pascal}Entity }} from '../entity/{lower}';
import {{ I{pascal}Repository }} from '../repository/{lower}';

export const {pascal}ListSchema = z.intersection(PaginationSchema, SortSchema.merge(SearchSchema));

export type {pascal}ListInput = PaginationInput<{pascal}Entity>;
export type {pascal}ListOutput = PaginationOutput<{pascal}Entity>;

export class {pascal}ListUsecase {{
  constructor(private readonly {lower}Repository: I{pascal}Repository) {{}}

  @ValidateSchema({pascal}ListSchema)
  async execute(input: {pascal}ListInput): Promise<{pascal}ListOutput> {{
    const {lower}s = await this.{lower}Repository.paginate(input);

    return {{
      docs: {lower}s.docs.map((doc) => new {pascal}Entity(doc)),
      limit: {lower}s.limit,
      page: {lower}s.page,
      total: {lower}s.total
    }};
  }}
}}
"#
    )
}

pub fn delete_usecase(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ ValidateSchema }} from 'libs/utils/decorators/validate-schema.decorator';
import {{ ApiNotFoundException }} from 'libs/utils/exception';
import {{ ApiTrancingInput }} from 'libs/utils/request';
import {{ z }} from 'zod';

import {{ {pascal}Entity, {pascal}EntitySchema }} from '../entity/{lower}';
import {{ I{pascal}Repository }} from '../repository/{lower}';

export const {pascal}DeleteSchema = {pascal}EntitySchema.pick({{
  id: true
}});

export type {pascal}DeleteInput = z.infer<typeof {pascal}DeleteSchema>;
export type {pascal}DeleteOutput = {pascal}Entity;

export class {pascal}DeleteUsecase {{
  constructor(private readonly {lower}Repository: I{pascal}Repository) {{}}

  @ValidateSchema({pascal}DeleteSchema)
  async execute({{ id }}: {pascal}DeleteInput, {{ tracing, user }}: ApiTrancingInput): Promise<{pascal}DeleteOutput> {{
    const model = await this.{lower}Repository.findById(id);

    if (!model) {{
      throw new ApiNotFoundException('{lower}NotFound');
    }}

    const {lower} = new {pascal}Entity(model);

    {lower}.deletedAt = new Date();

    await this.{lower}Repository.updateOne({{ id: {lower}.id }}, {lower});

    tracing.logEvent('{lower}-deleted', `{lower} deleted by: ${{user.login}}`);

    return {lower};
  }}
}}
"#
    )
}

// ── modules/<lower>/ ────────────────────────────────────────────────────────

pub fn adapter(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ ApiTrancingInput }} from 'libs/utils/request';

import {{ {pascal}CreateInput, {pascal}CreateOutput }} from '../../core/use-cases/{lower}-create';
import {{ {pascal}DeleteInput, {pascal}DeleteOutput }} from '../../core/use-cases/{lower}-delete';
import {{ {pascal}GetByIDInput, {pascal}GetByIDOutput }} from '../../core/use-cases/{lower}-getByID';
import {{ {pascal}ListInput, {pascal}ListOutput }} from '../../core/use-cases/{lower}-list';
import {{ {pascal}UpdateInput, {pascal}UpdateOutput }} from '../../core/use-cases/{lower}-update';

export abstract class I{pascal}CreateAdapter {{
  abstract execute(input: {pascal}CreateInput, trace: ApiTrancingInput): Promise<{pascal}CreateOutput>;
}}

export abstract class I{pascal}UpdateAdapter {{
  abstract execute(input: {pascal}UpdateInput, trace: ApiTrancingInput): Promise<{pascal}UpdateOutput>;
}}

export abstract class I{pascal}GetByIDAdapter {{
  abstract execute(input: {pascal}GetByIDInput): Promise<{pascal}GetByIDOutput>;
}}

export abstract class I{pascal}ListAdapter {{
  abstract execute(input: {pascal}ListInput): Promise<{pascal}ListOutput>;
}}

export abstract class I{pascal}DeleteAdapter {{
  abstract execute(input: {pascal}DeleteInput, trace: ApiTrancingInput): Promise<{pascal}DeleteOutput>;
}}
"#
    )
}

pub fn controller(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ Controller, Delete, Get, Post, Put, Req, Version }} from '@nestjs/common';
import {{ ApiBearerAuth, ApiBody, ApiParam, ApiQuery, ApiResponse, ApiTags }} from '@nestjs/swagger';
import {{ UserRole }} from 'libs/core/user/entity/user';
import {{ Roles }} from 'libs/utils/decorators/role.decorator';
import {{ ApiRequest }} from 'libs/utils/request';
import {{ SearchHttpSchema }} from 'libs/utils/search';
import {{ SortHttpSchema }} from 'libs/utils/sort';

import {{ {pascal}CreateInput, {pascal}CreateOutput }} from '../../core/use-cases/{lower}-create';
import {{ {pascal}DeleteInput, {pascal}DeleteOutput }} from '../../core/use-cases/{lower}-delete';
import {{ {pascal}GetByIDInput, {pascal}GetByIDOutput }} from '../../core/use-cases/{lower}-getByID';
import {{ {pascal}ListInput, {pascal}ListOutput }} from '../../core/use-cases/{lower}-list';
import {{ {pascal}UpdateInput, {pascal}UpdateOutput }} from '../../core/use-cases/{lower}-update';
import {{
  I{pascal}CreateAdapter,
  I{pascal}DeleteAdapter,
  I{pascal}GetByIDAdapter,
  I{pascal}ListAdapter,
  I{pascal}UpdateAdapter
}} from './adapter';
import {{ SwagggerRequest, SwagggerResponse }} from './swagger';

@Controller()
@ApiTags('{lower}')
@ApiBearerAuth()
@Roles(UserRole.USER)
export class {pascal}Controller {{
  constructor(
    private readonly {lower}Create: I{pascal}CreateAdapter,
    private readonly {lower}Update: I{pascal}UpdateAdapter,
    private readonly {lower}GetByID: I{pascal}GetByIDAdapter,
    private readonly {lower}List: I{pascal}ListAdapter,
    private readonly {lower}Delete: I{pascal}DeleteAdapter
  ) {{}}

  @Post()
  @ApiResponse(SwagggerResponse.create[200])
  @ApiBody(SwagggerRequest.createBody)
  @Version('1')
  async create(@Req() {{ body, user, tracing }}: ApiRequest): Promise<{pascal}CreateOutput> {{
    return await this.{lower}Create.execute(body as {pascal}CreateInput, {{ user, tracing }});
  }}

  @Put()
  @ApiResponse(SwagggerResponse.update[200])
  @ApiResponse(SwagggerResponse.update[404])
  @ApiBody(SwagggerRequest.updateBody)
  @Version('1')
  async update(@Req() {{ body, user, tracing }}: ApiRequest): Promise<{pascal}UpdateOutput> {{
    return await this.{lower}Update.execute(body as {pascal}UpdateInput, {{ user, tracing }});
  }}

  @Get('/:id')
  @ApiParam({{ name: 'id', required: true }})
  @ApiResponse(SwagggerResponse.getByID[200])
  @ApiResponse(SwagggerResponse.getByID[404])
  @Version('1')
  async getById(@Req() {{ params }}: ApiRequest): Promise<{pascal}GetByIDOutput> {{
    return await this.{lower}GetByID.execute(params as {pascal}GetByIDInput);
  }}

  @Get()
  @ApiQuery(SwagggerRequest.listQuery.pagination.limit)
  @ApiQuery(SwagggerRequest.listQuery.pagination.page)
  @ApiQuery(SwagggerRequest.listQuery.sort)
  @ApiQuery(SwagggerRequest.listQuery.search)
  @ApiResponse(SwagggerResponse.list[200])
  @Version('1')
  async list(@Req() {{ query }}: ApiRequest): Promise<{pascal}ListOutput> {{
    const input: {pascal}ListInput = {{
      sort: SortHttpSchema.parse(query.sort),
      search: SearchHttpSchema.parse(query.search),
      limit: Number(query.limit),
      page: Number(query.page)
    }};

    return await this.{lower}List.execute(input);
  }}

  @Delete('/:id')
  @ApiParam({{ name: 'id', required: true }})
  @ApiResponse(SwagggerResponse.delete[200])
  @ApiResponse(SwagggerResponse.delete[404])
  @Version('1')
  async delete(@Req() {{ params, user, tracing }}: ApiRequest): Promise<{pascal}DeleteOutput> {{
    return await this.{lower}Delete.execute(params as {pascal}DeleteInput, {{ user, tracing }});
  }}
}}
"#
    )
}

pub fn module(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ MiddlewareConsumer, Module, NestModule }} from '@nestjs/common';
import {{ TokenModule }} from 'libs/auth';
import {{ RedisCacheModule }} from 'libs/infra/cache/redis';
import {{ IDataBaseAdapter }} from 'libs/infra/database';
import {{ PostgresDatabaseModule }} from 'libs/infra/database/postgres/module';
import {{ {pascal}Schema }} from 'libs/infra/database/postgres/schemas/{lower}';
import {{ ILoggerAdapter, LoggerModule }} from 'libs/infra/logger';
import {{ IsLoggedMiddleware }} from 'libs/utils/middlewares/is-logged.middleware';
import {{ ModelCtor, Sequelize }} from 'sequelize-typescript';

import {{ {pascal}Entity }} from '../../core/entity/{lower}';
import {{ I{pascal}Repository }} from '../../core/repository/{lower}';
import {{ {pascal}CreateUsecase }} from '../../core/use-cases/{lower}-create';
import {{ {pascal}DeleteUsecase }} from '../../core/use-cases/{lower}-delete';
import {{ {pascal}GetByIdUsecase }} from '../../core/use-cases/{lower}-getByID';
import {{ {pascal}ListUsecase }} from '../../core/use-cases/{lower}-list';
import {{ {pascal}UpdateUsecase }} from '../../core/use-cases/{lower}-update';
import {{
  I{pascal}CreateAdapter,
  I{pascal}DeleteAdapter,
  I{pascal}GetByIDAdapter,
  I{pascal}ListAdapter,
  I{pascal}UpdateAdapter
}} from './adapter';
import {{ {pascal}Controller }} from './controller';
import {{ {pascal}Repository }} from './repository';

@Module({{
  imports: [TokenModule, LoggerModule, RedisCacheModule, PostgresDatabaseModule],
  controllers: [{pascal}Controller],
  providers: [
    {{
      provide: I{pascal}Repository,
      useFactory: (database: IDataBaseAdapter) => {{
        const repository = database.getDatabase<Sequelize>().model({pascal}Schema);
        return new {pascal}Repository(repository as ModelCtor<{pascal}Schema> & {pascal}Entity);
      }},
      inject: [IDataBaseAdapter]
    }},
    {{
      provide: I{pascal}CreateAdapter,
      useFactory: (repository: I{pascal}Repository) => new {pascal}CreateUsecase(repository),
      inject: [I{pascal}Repository]
    }},
    {{
      provide: I{pascal}UpdateAdapter,
      useFactory: (logger: ILoggerAdapter, repository: I{pascal}Repository) => new {pascal}UpdateUsecase(repository, logger),
      inject: [ILoggerAdapter, I{pascal}Repository]
    }},
    {{
      provide: I{pascal}GetByIDAdapter,
      useFactory: (repository: I{pascal}Repository) => new {pascal}GetByIdUsecase(repository),
      inject: [I{pascal}Repository]
    }},
    {{
      provide: I{pascal}ListAdapter,
      useFactory: (repository: I{pascal}Repository) => new {pascal}ListUsecase(repository),
      inject: [I{pascal}Repository]
    }},
    {{
      provide: I{pascal}DeleteAdapter,
      useFactory: (repository: I{pascal}Repository) => new {pascal}DeleteUsecase(repository),
      inject: [I{pascal}Repository]
    }}
  ],
  exports: []
}})
export class {pascal}Module implements NestModule {{
  configure(consumer: MiddlewareConsumer) {{
    consumer.apply(IsLoggedMiddleware).forRoutes({pascal}Controller);
  }}
}}
"#
    )
}

pub fn repository(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    format!(
        r#"import {{ Injectable }} from '@nestjs/common';
import {{ {pascal}Schema }} from 'libs/infra/database/postgres/schemas/{lower}';
import {{ SequelizeRepository }} from 'libs/infra/repository/postgres/repository';
import {{ DatabaseOptionsSchema, DatabaseOptionsType }} from 'libs/utils/database/sequelize';
import {{ ConvertPaginateInputToSequelizeFilter }} from 'libs/utils/decorators/database/postgres/convert-paginate-input-to-sequelize-filter.decorator';
import {{ ValidateDatabaseSortAllowed }} from 'libs/utils/decorators/database/validate-database-sort-allowed.decorator';
import {{ SearchTypeEnum }} from 'libs/utils/decorators/types';
import {{ Transaction }} from 'sequelize';
import {{ ModelCtor }} from 'sequelize-typescript';

import {{ {pascal}Entity }} from '../../core/entity/{lower}';
import {{ I{pascal}Repository }} from '../../core/repository/{lower}';
import {{ {pascal}ListInput, {pascal}ListOutput }} from '../../core/use-cases/{lower}-list';

type Model = ModelCtor<{pascal}Schema> & {pascal}Entity;

@Injectable()
export class {pascal}Repository extends SequelizeRepository<Model> implements I{pascal}Repository {{
  constructor(readonly repository: Model) {{
    super(repository);
  }}

  async startSession<TTransaction = Transaction>(): Promise<TTransaction> {{
    const transaction = await this.repository.sequelize.transaction();

    return transaction as TTransaction;
  }}

  @ValidateDatabaseSortAllowed<{pascal}Entity>('createdAt', 'breed')
  @ConvertPaginateInputToSequelizeFilter<{pascal}Entity>([
    {{ name: 'name', type: SearchTypeEnum.like }},
    {{ name: 'breed', type: SearchTypeEnum.like }},
    {{ name: 'age', type: SearchTypeEnum.equal }}
  ])
  async paginate(input: {pascal}ListInput, options: DatabaseOptionsType): Promise<{pascal}ListOutput> {{
    const {{ schema }} = DatabaseOptionsSchema.parse(options);

    const list = await this.repository.schema(schema).findAndCountAll(input);

    return {{ docs: list.rows.map((r) => new {pascal}Entity(r)), limit: input.limit, page: input.page, total: list.count }};
  }}
}}
"#
    )
}

pub fn swagger(b: &NameBundle, ctx: &RenderContext) -> String {
    let pascal = b.pascal();
    let lower = b.lower();
    let root = ctx.root_name(b);
    format!(
        r#"import {{ name }} from 'apps/{root}/package.json';
import {{ {pascal}Request }} from 'libs/utils/docs/data/{lower}/request';
import {{ {pascal}Response }} from 'libs/utils/docs/data/{lower}/response';
import {{ Swagger }} from 'libs/utils/docs/swagger';

export const SwagggerResponse = {{
  create: {{
    200: Swagger.defaultResponseJSON({{
      status: 200,
      json: {pascal}Response.create,
      description: '{lower} created.'
    }})
  }},
  update: {{
    200: Swagger.defaultResponseJSON({{
      status: 200,
      json: {pascal}Response.update,
      description: '{lower} updated.'
    }}),
    404: Swagger.defaultResponseError({{
      status: 404,
      route: 'api/{lower}',
      message: '{lower} Not Found',
      description: '{lower} not found.'
    }})
  }},
  getByID: {{
    200: Swagger.defaultResponseJSON({{
      status: 200,
      json: {pascal}Response.getByID,
      description: '{lower} found.'
    }}),
    404: Swagger.defaultResponseError({{
      status: 404,
      route: 'api/{lower}/:id',
      message: '{lower} Not Found',
      description: '{lower} not found.'
    }})
  }},
  delete: {{
    200: Swagger.defaultResponseJSON({{
      status: 200,
      json: {pascal}Response.delete,
      description: '{lower} deleted.'
    }}),
    404: Swagger.defaultResponseError({{
      status: 404,
      route: 'api/{lower}/:id',
      message: '{lower} Not Found',
      description: '{lower} not found.'
    }})
  }},
  list: {{
    200: Swagger.defaultResponseJSON({{
      status: 200,
      json: {pascal}Response.list,
      description: '{lower} listed.'
    }})
  }}
}};

export const SwagggerRequest = {{
  createBody: Swagger.defaultRequestJSON({pascal}Request.create),
  updateBody: Swagger.defaultRequestJSON({pascal}Request.update),
  listQuery: {{
    pagination: {{
      limit: Swagger.defaultApiQueryOptions({{ example: 10, name: 'limit', required: false }}),
      page: Swagger.defaultApiQueryOptions({{ example: 1, name: 'page', required: false }})
    }},
    sort: Swagger.defaultApiQueryOptions({{
      name: 'sort',
      required: false,
      description: '<b>createdAt:desc,name:asc'
    }}),
    search: Swagger.defaultApiQueryOptions({{
      name: 'search',
      required: false,
      description: '<b>name:miau,breed:siamese'
    }})
  }}
}};
"#
    )
}

// ── modules/<lower>/__tests__/ ──────────────────────────────────────────────

pub fn controller_spec(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    format!(
        r#"import {{ Test, TestingModule }} from '@nestjs/testing';

import {{
  I{pascal}CreateAdapter,
  I{pascal}DeleteAdapter,
  I{pascal}GetByIDAdapter,
  I{pascal}ListAdapter,
  I{pascal}UpdateAdapter
}} from '../adapter';
import {{ {pascal}Controller }} from '../controller';

describe('{pascal}Controller', () => {{
  let controller: {pascal}Controller;
  const execute = jest.fn();

  beforeEach(async () => {{
    const app: TestingModule = await Test.createTestingModule({{
      controllers: [{pascal}Controller],
      providers: [
        {{ provide: I{pascal}CreateAdapter, useValue: {{ execute }} }},
        {{ provide: I{pascal}UpdateAdapter, useValue: {{ execute }} }},
        {{ provide: I{pascal}GetByIDAdapter, useValue: {{ execute }} }},
        {{ provide: I{pascal}ListAdapter, useValue: {{ execute }} }},
        {{ provide: I{pascal}DeleteAdapter, useValue: {{ execute }} }}
      ]
    }}).compile();

    controller = app.get({pascal}Controller);
  }});

  it('should be defined', () => {{
    expect(controller).toBeInstanceOf({pascal}Controller);
  }});

  it('should delegate getById to the use case', async () => {{
    execute.mockResolvedValue({{ id: '1' }});
    await expect(controller.getById({{ params: {{ id: '1' }} }} as never)).resolves.toEqual({{ id: '1' }});
  }});
}});
"#
    )
}

pub fn module_spec(b: &NameBundle, _: &RenderContext) -> String {
    let pascal = b.pascal();
    format!(
        r#"import {{ Test, TestingModule }} from '@nestjs/testing';

import {{ {pascal}Module }} from '../module';

describe('{pascal}Module', () => {{
  let module: {pascal}Module;

  beforeEach(async () => {{
    const app: TestingModule = await Test.createTestingModule({{
      providers: [{pascal}Module]
    }}).compile();

    module = app.get<{pascal}Module>({pascal}Module);
  }});

  it('should be defined', () => {{
    expect(module).toBeInstanceOf({pascal}Module);
  }});
}});
"#
    )
}
